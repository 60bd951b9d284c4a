use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::sprite::SpriteComponent;
#[cfg(feature = "physics")]
use crate::core::physics::PhysicsBody;

/// Fat Entity: a single struct with optional components.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    /// String tag for debugging and bulk lookups. Game logic should key on
    /// its own typed records, not on tags.
    pub tag: String,
    /// Hidden entities still simulate but emit no render instance.
    pub visible: bool,
    /// Position in world space, synced from the physics body every step.
    pub pos: Vec2,
    /// Rotation in radians, synced from the physics body every step.
    pub rotation: f32,
    /// Rendered size in world units.
    pub size: f32,
    /// Sprite component (optional; entities without sprites are invisible).
    pub sprite: Option<SpriteComponent>,
    #[cfg(feature = "physics")]
    pub body: Option<PhysicsBody>,
}

impl Entity {
    /// Create a new visible entity with the given ID at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            visible: true,
            pos: Vec2::ZERO,
            rotation: 0.0,
            size: 1.0,
            sprite: None,
            #[cfg(feature = "physics")]
            body: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    #[cfg(feature = "physics")]
    pub fn with_body(mut self, body: PhysicsBody) -> Self {
        self.body = Some(body);
        self
    }
}
