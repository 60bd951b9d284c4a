use bytemuck::{Pod, Zeroable};

/// Per-instance render data read by the page straight out of WASM memory.
/// Must match the host protocol: 8 floats = 32 bytes stride.
///
/// The `size` field is the world-space rendered size; the host draws the
/// atlas cell centred on (x, y), rotated by `rotation`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    pub x: f32,
    pub y: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// World-space rendered size in game units.
    pub size: f32,
    pub sprite_col: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// UV cell span (1.0 = single cell, 2.0 = 2x2 block).
    pub cell_span: f32,
    pub atlas_row: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// All instances for one frame, in draw order.
pub struct RenderBuffer {
    /// Text-pass instances first (font atlas), image-pass instances after
    /// `atlas_split`.
    pub instances: Vec<RenderInstance>,
    /// Instances `[0..atlas_split)` sample the font atlas,
    /// `[atlas_split..]` sample the sprite atlas.
    pub atlas_split: u32,
    capacity: usize,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(512)
    }

    /// Buffer that holds at most `capacity` instances per frame.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            atlas_split: 0,
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.atlas_split = 0;
    }

    /// Append an instance. Returns `false` (and drops the instance) when the
    /// buffer is full.
    pub fn push(&mut self, instance: RenderInstance) -> bool {
        if self.instances.len() >= self.capacity {
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn set_atlas_split(&mut self, split: u32) {
        self.atlas_split = split;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raw pointer to instance data for reads from the page.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
