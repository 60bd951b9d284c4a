pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::sprite::{SpriteComponent, AtlasId};
pub use self::core::scene::Scene;
pub use self::core::time::FixedTimestep;
pub use self::core::timer::Timer;
pub use self::core::rng::Rng;
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::AssetManifest;
pub use assets::registry::{SpriteRegistry, RegisteredSprite};
pub use bridge::protocol::ProtocolLayout;
pub use systems::render::build_render_buffer;
pub use systems::text::{FontConfig, glyph_sprite};

#[cfg(feature = "physics")]
pub use self::core::physics::{
    PhysicsWorld, PhysicsBody, BodyDesc, BodyType,
    ColliderDesc, ColliderMaterial, CollisionPair,
};
