pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates the `thread_local!` storage for the [`GameRunner`], a
/// `with_runner()` helper and the exported functions the page calls:
/// lifecycle (`game_init`, `game_tick`, `game_load_manifest`), pointer input,
/// and buffer accessors.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use glyphfall_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// glyphfall_web::export_game!(MyGame, "my-game");
/// ```
///
/// The game type must provide `fn new() -> Self`. The calling crate needs
/// `log`, `glam`, `console_log`, `console_error_panic_hook` and `web-sys`
/// (feature `console`) as dependencies.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        /// Run `f` against the initialized runner. Calls made before
        /// `game_init` are logged and answered with `R::default()`.
        fn with_runner<R: Default>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => f(runner),
                None => {
                    log::warn!("{}: called before game_init()", $game_name);
                    R::default()
                }
            })
        }

        /// Pointer accessors cannot default; a null pointer tells the page
        /// there is nothing to read.
        fn runner_ptr<T>(f: impl FnOnce(&$crate::GameRunner<$game_type>) -> *const T) -> *const T {
            RUNNER.with(|cell| match cell.borrow().as_ref() {
                Some(runner) => f(runner),
                None => std::ptr::null(),
            })
        }

        #[wasm_bindgen]
        pub fn game_init(viewport_width: f32, viewport_height: f32) {
            console_error_panic_hook::set_once();
            if console_log::init_with_level(log::Level::Info).is_err() {
                web_sys::console::warn_1(&concat!($game_name, ": logger already installed").into());
            }

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init(glam::Vec2::new(viewport_width, viewport_height)));
            log::info!("{}: initialized ({}x{})", $game_name, viewport_width, viewport_height);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            runner_ptr(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            runner_ptr(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_atlas_split() -> u32 {
            with_runner(|r| r.atlas_split())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            runner_ptr(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
