use glam::Vec2;
use glyphfall_engine::bridge::protocol::HEADER_FLOATS;
use glyphfall_engine::{
    build_render_buffer, AssetManifest, EngineContext, FixedTimestep, Game, GameConfig,
    InputEvent, InputQueue, ProtocolLayout, RenderBuffer, SpriteRegistry,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see [`export_game!`](crate::export_game)),
/// because wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    /// Stays empty; handed to every fixed step after the first in a frame so
    /// pointer events are seen once.
    no_input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    frame: u32,
    header: [f32; HEADER_FLOATS],
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);

        Self {
            game,
            ctx: EngineContext::from_config(&config),
            input: InputQueue::new(),
            no_input: InputQueue::new(),
            render_buffer,
            timestep,
            layout,
            config,
            initialized: false,
            frame: 0,
            header: [0.0; HEADER_FLOATS],
        }
    }

    /// Initialize the game. Call once after construction.
    ///
    /// A non-zero `viewport` replaces the configured world size, so the stage
    /// fills the browser window.
    pub fn init(&mut self, viewport: Vec2) {
        self.config = self.game.config();
        if viewport.x > 0.0 && viewport.y > 0.0 {
            self.config.world_width = viewport.x;
            self.config.world_height = viewport.y;
        }
        self.layout = ProtocolLayout::from_config(&self.config);
        self.timestep = FixedTimestep::new(self.config.fixed_dt);
        self.render_buffer = RenderBuffer::with_capacity(self.config.max_instances);

        // A manifest may have arrived before init; keep it.
        let sprites = std::mem::take(&mut self.ctx.sprites);
        self.ctx = EngineContext::from_config(&self.config);
        self.ctx.sprites = sprites;

        self.game.init(&mut self.ctx);
        self.initialized = true;
        log::debug!(
            "runner: world {}x{}, dt {}",
            self.config.world_width,
            self.config.world_height,
            self.config.fixed_dt
        );
    }

    /// Parse an asset manifest and install its sprites. A malformed manifest
    /// is logged and the previous sprites stay in place.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                self.ctx.sprites = SpriteRegistry::from_manifest(&manifest);
                log::info!(
                    "runner: loaded manifest ({} atlases, {} sprites)",
                    manifest.atlases.len(),
                    self.ctx.sprites.len()
                );
            }
            Err(err) => log::error!("runner: invalid asset manifest: {}", err),
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one animation frame: fixed steps of game logic + physics, then
    /// rebuild the render buffer.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for step in 0..steps {
            let input = if step == 0 { &self.input } else { &self.no_input };
            self.game.update(&mut self.ctx, input);
            #[cfg(feature = "physics")]
            self.ctx.step_physics();
        }

        // Pointer events wait for the next frame that actually steps.
        if steps > 0 {
            self.input.drain();
        }

        if self.ctx.events.len() > self.config.max_events {
            log::warn!(
                "runner: dropping {} game events over capacity",
                self.ctx.events.len() - self.config.max_events
            );
            self.ctx.events.truncate(self.config.max_events);
        }

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);

        self.frame = self.frame.wrapping_add(1);
        self.header = self.layout.header(
            self.frame,
            self.render_buffer.instance_count(),
            self.render_buffer.atlas_split,
            self.ctx.events.len() as u32,
            self.config.world_width,
        );
    }

    /// Read access to the engine state, mostly for tests and debugging.
    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    // ---- Pointer accessors for reads from WASM memory ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn atlas_split(&self) -> u32 {
        self.render_buffer.atlas_split
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
