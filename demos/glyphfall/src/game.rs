//! Glyphfall: the text appears letter by letter, falls when two brains fly
//! in, and the brains burst on impact.

use glam::Vec2;
use glyphfall_engine::{
    BodyDesc, ColliderDesc, ColliderMaterial, EngineContext, Entity, Game, GameConfig, GameEvent,
    InputQueue,
};

use crate::collisions::dispatch_collisions;
use crate::config::StageConfig;
use crate::drag::PointerDrag;
use crate::layout::{layout_glyphs, spawn_glyphs, LayoutParams};
use crate::reveal::{RevealPhase, RevealScheduler};
use crate::spawner::spawn_brains;
use crate::stage::Stage;
use crate::visuals::SpriteBinder;

/// Event kinds sent to the page.
pub mod game_events {
    /// Every glyph is showing; the spawn delay has started.
    pub const REVEAL_COMPLETE: f32 = 1.0;
    /// Brains are in and glyphs are falling.
    pub const BRAINS_SPAWNED: f32 = 2.0;
    /// The brains collided. Payload: impact x, y.
    pub const EXPLOSION: f32 = 3.0;
}

pub struct Glyphfall {
    config: StageConfig,
    stage: Stage,
    reveal: RevealScheduler,
    drag: PointerDrag,
    visuals: SpriteBinder,
}

impl Glyphfall {
    pub fn new() -> Self {
        Self::with_config(StageConfig::default())
    }

    pub fn with_config(config: StageConfig) -> Self {
        Self {
            stage: Stage::new(),
            reveal: RevealScheduler::new(config.reveal_interval, config.spawn_delay),
            drag: PointerDrag::new(config.drag_stiffness),
            visuals: SpriteBinder::new(),
            config,
        }
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn phase(&self) -> RevealPhase {
        self.reveal.phase()
    }

    fn spawn_ground(&self, ctx: &mut EngineContext) {
        let world = ctx.world_size();
        let id = ctx.next_id();
        let desc = BodyDesc::fixed(ColliderDesc::Cuboid {
            half_width: world.x / 2.0,
            half_height: self.config.ground_thickness / 2.0,
        })
        .with_position(Vec2::new(world.x / 2.0, world.y));
        ctx.spawn_with_body(
            Entity::new(id).with_tag("ground"),
            desc,
            ColliderMaterial::default(),
        );
    }
}

impl Default for Glyphfall {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Glyphfall {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: self.config.fixed_dt,
            world_width: self.config.fallback_world.x,
            world_height: self.config.fallback_world.y,
            max_instances: 512,
            max_events: 32,
            seed: self.config.seed,
            gravity: Vec2::new(0.0, self.config.gravity),
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.stage = Stage::new();
        self.reveal = RevealScheduler::new(self.config.reveal_interval, self.config.spawn_delay);
        self.drag = PointerDrag::new(self.config.drag_stiffness);

        self.spawn_ground(ctx);

        let params = LayoutParams::for_world(&self.config, ctx.world_size());
        let placed = layout_glyphs(&self.config.text, &params);
        spawn_glyphs(ctx, &mut self.stage, &placed, &self.config);
        self.visuals.sync(ctx, &self.stage, &self.config);

        log::info!(
            "glyphfall: {} glyphs laid out in {}x{}",
            self.stage.glyph_count(),
            ctx.world_size().x,
            ctx.world_size().y
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let dt = self.config.fixed_dt;

        // Contacts from the previous physics step.
        let pairs = ctx.collisions().to_vec();
        if let Some(impact) = dispatch_collisions(ctx, &mut self.stage, &pairs, &self.config) {
            ctx.emit_event(GameEvent::at(game_events::EXPLOSION, impact.x, impact.y));
        }

        let before = self.reveal.phase();
        if self.reveal.advance(dt, &mut self.stage) {
            spawn_brains(ctx, &mut self.stage, &self.config);
            ctx.emit_event(GameEvent::signal(game_events::BRAINS_SPAWNED));
        }
        if before == RevealPhase::Revealing && self.reveal.phase() != RevealPhase::Revealing {
            ctx.emit_event(GameEvent::signal(game_events::REVEAL_COMPLETE));
        }

        self.drag.handle_input(ctx, &self.stage, input);
        self.drag.apply(ctx, dt);

        self.visuals.sync(ctx, &self.stage, &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{BodyKind, Mobility};
    use glyphfall_engine::{
        build_render_buffer, AssetManifest, BodyType, InputEvent, RenderBuffer, SpriteRegistry,
    };

    const MANIFEST: &str = r#"{
        "atlases": [
            { "name": "font", "cols": 16, "rows": 6, "path": "font.png" },
            { "name": "bodies", "cols": 2, "rows": 2, "path": "bodies.png" }
        ],
        "sprites": {
            "brain_left":  { "atlas": 1, "col": 0, "row": 0, "native_size": 800 },
            "brain_right": { "atlas": 1, "col": 1, "row": 0, "native_size": 800 },
            "fragment_a":  { "atlas": 1, "col": 0, "row": 1, "native_size": 400 },
            "fragment_b":  { "atlas": 1, "col": 1, "row": 1, "native_size": 1200 }
        }
    }"#;

    fn start(text: &str) -> (Glyphfall, EngineContext) {
        let mut game = Glyphfall::with_config(StageConfig::default().with_text(text));
        let mut ctx = EngineContext::from_config(&game.config());
        ctx.sprites = SpriteRegistry::from_manifest(&AssetManifest::from_json(MANIFEST).unwrap());
        game.init(&mut ctx);
        (game, ctx)
    }

    /// One fixed step the way the runner drives it.
    fn step(game: &mut Glyphfall, ctx: &mut EngineContext) {
        game.update(ctx, &InputQueue::new());
        ctx.step_physics();
    }

    #[test]
    fn init_lays_out_text_above_the_ground() {
        let (game, ctx) = start("0123456789");
        assert_eq!(game.stage().glyph_count(), 10);
        // Ten glyphs plus the ground.
        assert_eq!(ctx.physics.body_count(), 11);
        assert_eq!(ctx.scene.iter().filter(|e| e.tag == "ground").count(), 1);
        assert!(game.stage().actors().is_empty());

        let xs: Vec<f32> = game
            .stage()
            .glyphs()
            .iter()
            .map(|g| ctx.scene.get(g.id).unwrap().pos.x)
            .collect();
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0] - 25.0).abs() < 1e-3);
        }
    }

    #[test]
    fn pinned_glyphs_stay_put_while_revealing() {
        let (mut game, mut ctx) = start("abc");
        let first = game.stage().glyphs()[0].id;
        let origin = ctx.scene.get(first).unwrap().pos;

        for _ in 0..30 {
            step(&mut game, &mut ctx);
        }
        assert_eq!(game.stage().revealed(), 3);
        assert_eq!(ctx.scene.get(first).unwrap().pos, origin);
        assert_eq!(ctx.body_type(first), BodyType::Fixed);
    }

    #[test]
    fn brains_spawn_once_after_reveal_and_delay() {
        let (mut game, mut ctx) = start("0123456789");
        let mut steps = 0;
        let mut reveal_events = 0;

        while game.stage().actors().is_empty() {
            ctx.clear_frame_data();
            step(&mut game, &mut ctx);
            reveal_events += ctx
                .events
                .iter()
                .filter(|e| e.kind == game_events::REVEAL_COMPLETE)
                .count();
            steps += 1;
            assert!(steps < 60 * 10, "brains never spawned");
        }

        // (10 + 1) reveal ticks at 50 ms plus the 2 s delay, at 60 Hz.
        assert!(steps as f32 / 60.0 >= 2.55 - 0.02);
        assert_eq!(reveal_events, 1);
        assert!(ctx
            .events
            .iter()
            .any(|e| e.kind == game_events::BRAINS_SPAWNED));

        let kinds: Vec<BodyKind> = game.stage().actors().iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![BodyKind::BrainLeft, BodyKind::BrainRight]);
        assert_eq!(ctx.physics.body_count(), 10 + 1 + 2);
        for glyph in game.stage().glyphs() {
            assert_eq!(glyph.mobility(), Mobility::Dynamic);
            assert_eq!(ctx.body_type(glyph.id), BodyType::Dynamic);
        }
    }

    #[test]
    fn brains_meet_and_explode_exactly_once() {
        let (mut game, mut ctx) = start("0123456789");
        let mut explosions = 0;

        for _ in 0..60 * 8 {
            ctx.clear_frame_data();
            step(&mut game, &mut ctx);
            explosions += ctx
                .events
                .iter()
                .filter(|e| e.kind == game_events::EXPLOSION)
                .count();
        }

        assert!(game.stage().explosion_fired());
        assert_eq!(explosions, 1);
        let kinds: Vec<BodyKind> = game.stage().actors().iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BodyKind::BrainLeft,
                BodyKind::BrainRight,
                BodyKind::FragmentA,
                BodyKind::FragmentB,
            ]
        );
    }

    #[test]
    fn render_pass_puts_revealed_text_before_images() {
        let (mut game, mut ctx) = start("ab❕");
        while game.phase() != RevealPhase::Spawned {
            step(&mut game, &mut ctx);
        }

        let mut buffer = RenderBuffer::new();
        build_render_buffer(ctx.scene.iter(), &mut buffer);

        // 'a' and 'b' are drawn as text; '❕' has no font cell. Two brains follow.
        assert_eq!(buffer.atlas_split, 2);
        assert_eq!(buffer.instance_count(), 4);
        let brain = &buffer.instances[2];
        assert!((brain.size - 240.0).abs() < 1e-3);
    }

    #[test]
    fn ground_is_never_grabbed() {
        let (mut game, mut ctx) = start("a");
        let world = ctx.world_size();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown {
            x: world.x / 2.0,
            y: world.y,
        });
        game.update(&mut ctx, &input);
        assert_eq!(game.drag.grabbed(), None);
    }
}
