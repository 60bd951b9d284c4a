use glam::Vec2;

use crate::api::types::{EntityId, GameEvent};
use crate::assets::registry::SpriteRegistry;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
#[cfg(feature = "physics")]
use crate::components::entity::Entity;
#[cfg(feature = "physics")]
use crate::core::physics::{
    BodyDesc, BodyType, ColliderMaterial, CollisionPair, PhysicsWorld,
};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in game units. Replaced by the viewport width when the
    /// host passes one to `game_init`.
    pub world_width: f32,
    /// World height in game units. Replaced by the viewport height when the
    /// host passes one to `game_init`.
    pub world_height: f32,
    /// Maximum number of render instances (default: 512).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Seed for the context's random number generator.
    pub seed: u64,
    /// Gravity vector for physics simulation. Default: zero (no gravity).
    /// Y-down coordinates: positive Y pulls downward.
    #[cfg(feature = "physics")]
    pub gravity: Vec2,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_instances: 512,
            max_events: 32,
            seed: 42,
            #[cfg(feature = "physics")]
            gravity: Vec2::ZERO,
        }
    }
}

impl GameConfig {
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height)
    }
}

/// The contract every game fulfils.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Set up initial state and spawn entities.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed step of game logic. Runs before the physics step, so
    /// `ctx.collisions()` holds the pairs produced by the previous step.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub events: Vec<GameEvent>,
    /// Seedable randomness for game logic.
    pub rng: Rng,
    /// Named sprites from the asset manifest. Empty until the host loads one.
    pub sprites: SpriteRegistry,
    world_size: Vec2,
    next_id: u32,
    #[cfg(feature = "physics")]
    pub physics: PhysicsWorld,
    #[cfg(feature = "physics")]
    collision_events: Vec<CollisionPair>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Create a context whose world size, seed, timestep and gravity come
    /// from `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        #[cfg(feature = "physics")]
        let physics = {
            let mut physics = PhysicsWorld::new(config.gravity);
            physics.set_dt(config.fixed_dt);
            physics
        };
        Self {
            scene: Scene::new(),
            events: Vec::with_capacity(config.max_events),
            rng: Rng::new(config.seed),
            sprites: SpriteRegistry::new(),
            world_size: config.world_size(),
            next_id: 1,
            #[cfg(feature = "physics")]
            physics,
            #[cfg(feature = "physics")]
            collision_events: Vec::new(),
        }
    }

    /// World dimensions in game units.
    pub fn world_size(&self) -> Vec2 {
        self.world_size
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the page.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    // -- Physics convenience methods --

    /// Spawn an entity with a physics body. Returns the EntityId.
    /// The entity's position is taken from the BodyDesc.
    #[cfg(feature = "physics")]
    pub fn spawn_with_body(
        &mut self,
        entity: Entity,
        desc: BodyDesc,
        material: ColliderMaterial,
    ) -> EntityId {
        let id = entity.id;
        let body = self.physics.create_body(id, &desc, material);
        let entity = entity.with_pos(desc.position).with_body(body);
        self.scene.spawn(entity);
        id
    }

    /// Set the linear velocity of an entity's physics body.
    #[cfg(feature = "physics")]
    pub fn set_velocity(&mut self, id: EntityId, vel: Vec2) {
        if let Some(body) = self.scene.get(id).and_then(|e| e.body) {
            self.physics.set_velocity(&body, vel);
        }
    }

    /// Get the linear velocity of an entity's physics body.
    #[cfg(feature = "physics")]
    pub fn velocity(&self, id: EntityId) -> Vec2 {
        self.scene
            .get(id)
            .and_then(|e| e.body.as_ref())
            .map(|body| self.physics.velocity(body))
            .unwrap_or(Vec2::ZERO)
    }

    /// Set the angular velocity (rad/s) of an entity's physics body.
    #[cfg(feature = "physics")]
    pub fn set_angular_velocity(&mut self, id: EntityId, angvel: f32) {
        if let Some(body) = self.scene.get(id).and_then(|e| e.body) {
            self.physics.set_angular_velocity(&body, angvel);
        }
    }

    /// Get the angular velocity (rad/s) of an entity's physics body.
    #[cfg(feature = "physics")]
    pub fn angular_velocity(&self, id: EntityId) -> f32 {
        self.scene
            .get(id)
            .and_then(|e| e.body.as_ref())
            .map(|body| self.physics.angular_velocity(body))
            .unwrap_or(0.0)
    }

    /// Switch an entity's body between fixed and dynamic.
    #[cfg(feature = "physics")]
    pub fn set_body_type(&mut self, id: EntityId, body_type: BodyType) {
        if let Some(body) = self.scene.get(id).and_then(|e| e.body) {
            self.physics.set_body_type(&body, body_type);
        }
    }

    /// Mobility of an entity's body; entities without a body report `Fixed`.
    #[cfg(feature = "physics")]
    pub fn body_type(&self, id: EntityId) -> BodyType {
        self.scene
            .get(id)
            .and_then(|e| e.body.as_ref())
            .map(|body| self.physics.body_type(body))
            .unwrap_or(BodyType::Fixed)
    }

    /// Collision events from the most recent physics step.
    #[cfg(feature = "physics")]
    pub fn collisions(&self) -> &[CollisionPair] {
        &self.collision_events
    }

    /// Step the physics simulation and sync positions back to entities.
    /// Called by the runner after every `Game::update()`.
    #[cfg(feature = "physics")]
    pub fn step_physics(&mut self) {
        self.collision_events.clear();
        self.physics.step_into(&mut self.collision_events);

        for entity in self.scene.iter_mut() {
            if let Some(body) = &entity.body {
                let (pos, rot) = self.physics.body_position(body);
                entity.pos = pos;
                entity.rotation = rot;
            }
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut ctx = EngineContext::new();
        assert_eq!(ctx.next_id(), EntityId(1));
        assert_eq!(ctx.next_id(), EntityId(2));
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent::signal(1.0));
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn world_size_comes_from_config() {
        let config = GameConfig {
            world_width: 1280.0,
            world_height: 720.0,
            ..GameConfig::default()
        };
        let ctx = EngineContext::from_config(&config);
        assert_eq!(ctx.world_size(), Vec2::new(1280.0, 720.0));
    }
}
