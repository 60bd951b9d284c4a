//! Bitmap font text rendering.
//!
//! Text is drawn through the sprite pipeline: a glyph body carries a
//! SpriteComponent pointing at its character's cell in the font atlas, so the
//! character follows the body's position and rotation for free.
//!
//! Font atlases are standard sprite atlases with characters laid out in ASCII
//! order, typically 16 columns × 6 rows for printable ASCII (32-127).

use crate::components::sprite::{AtlasId, SpriteComponent};

/// Configuration for a bitmap font atlas.
#[derive(Debug, Clone)]
pub struct FontConfig {
    /// Which atlas contains the font glyphs.
    pub atlas: AtlasId,
    pub cols: u32,
    pub rows: u32,
    /// First ASCII code in the atlas (typically 32 = space).
    pub start_char: u8,
    /// Rendered glyph size in world units.
    pub size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            atlas: AtlasId::FONT,
            cols: 16,
            rows: 6,
            start_char: 32,
            size: 20.0,
        }
    }
}

impl FontConfig {
    pub fn with_grid(mut self, cols: u32, rows: u32) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

/// Convert a character to grid coordinates (col, row) in the font atlas.
///
/// Returns `None` if the character is outside the valid range for this font.
pub fn char_to_grid(c: char, font: &FontConfig) -> Option<(f32, f32)> {
    let code = c as u32;
    let start = font.start_char as u32;

    if code < start {
        return None;
    }

    let index = code - start;
    if index >= font.cols * font.rows {
        return None;
    }

    let col = (index % font.cols) as f32;
    let row = (index / font.cols) as f32;

    Some((col, row))
}

/// Sprite drawing `c` from the font atlas, or `None` when the font has no cell
/// for it. Whitespace maps to a blank cell like any other printable char.
pub fn glyph_sprite(c: char, font: &FontConfig) -> Option<SpriteComponent> {
    let (col, row) = char_to_grid(c, font)?;
    Some(SpriteComponent {
        atlas: font.atlas,
        col,
        row,
        cell_span: 1.0,
        alpha: 1.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_to_grid_basic() {
        let font = FontConfig::default();
        // 'A' is ASCII 65, index 33 → col 1, row 2
        let (col, row) = char_to_grid('A', &font).unwrap();
        assert_eq!(col, 1.0);
        assert_eq!(row, 2.0);
    }

    #[test]
    fn char_to_grid_space() {
        let font = FontConfig::default();
        assert_eq!(char_to_grid(' ', &font), Some((0.0, 0.0)));
    }

    #[test]
    fn char_to_grid_out_of_range() {
        let font = FontConfig::default();
        assert!(char_to_grid('\t', &font).is_none());
        assert!(char_to_grid('\u{80}', &font).is_none());
        assert!(char_to_grid('❕', &font).is_none());
    }

    #[test]
    fn char_to_grid_end_of_range() {
        let font = FontConfig::default();
        // '~' is ASCII 126, index 94 → col 14, row 5
        assert_eq!(char_to_grid('~', &font), Some((14.0, 5.0)));
    }

    #[test]
    fn glyph_sprite_uses_font_atlas() {
        let font = FontConfig::default();
        let sprite = glyph_sprite('T', &font).unwrap();
        assert_eq!(sprite.atlas, AtlasId::FONT);
        // 'T' is ASCII 84, index 52 → col 4, row 3
        assert_eq!((sprite.col, sprite.row), (4.0, 3.0));
        assert!(glyph_sprite('❕', &font).is_none());
    }

    #[test]
    fn custom_grid_narrows_range() {
        let font = FontConfig::default().with_grid(8, 2);
        assert!(char_to_grid('/', &font).is_some()); // index 15
        assert!(char_to_grid('0', &font).is_none()); // index 16
    }
}
