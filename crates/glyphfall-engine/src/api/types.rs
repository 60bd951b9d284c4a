use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// A game event communicated from Rust to the page through WASM memory.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    /// Event with only a kind and no payload.
    pub fn signal(kind: f32) -> Self {
        Self { kind, ..Self::default() }
    }

    /// Event carrying a 2D point in `a`/`b`.
    pub fn at(kind: f32, x: f32, y: f32) -> Self {
        Self { kind, a: x, b: y, c: 0.0 }
    }
}
