/// Identifies which texture atlas a sprite belongs to.
/// Index into the AssetManifest's atlas list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AtlasId(pub u32);

impl AtlasId {
    /// Convention: atlas 0 holds the bitmap font, drawn in the text pass.
    pub const FONT: AtlasId = AtlasId(0);
    /// Convention: atlas 1 holds the body images, drawn in the image pass.
    pub const SPRITES: AtlasId = AtlasId(1);
}

/// Sprite component: defines how an entity appears visually.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    pub atlas: AtlasId,
    /// Column in the atlas grid.
    pub col: f32,
    /// Row in the atlas grid.
    pub row: f32,
    /// Number of cells this sprite spans (1.0 = single cell, 2.0 = 2x2 block).
    pub cell_span: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self {
            atlas: AtlasId::SPRITES,
            col: 0.0,
            row: 0.0,
            cell_span: 1.0,
            alpha: 1.0,
        }
    }
}
