use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Asset manifest describing the texture atlases and named sprites of a game.
/// The page fetches it alongside the images and hands the JSON to Rust
/// before the first frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    pub atlases: Vec<AtlasDescriptor>,
    /// Named sprite lookup: name → atlas index + cell coordinates.
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDescriptor>,
}

/// Describes a single texture atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    /// Human-readable name (e.g., "font", "actors").
    pub name: String,
    pub cols: u32,
    pub rows: u32,
    /// Relative path to the PNG file.
    pub path: String,
}

/// Describes a named sprite within an atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Index into the atlases array.
    pub atlas: u32,
    pub col: u32,
    pub row: u32,
    /// Number of cells this sprite spans (default: 1).
    #[serde(default = "default_span")]
    pub span: u32,
    /// Source image size in pixels (longest side). Games scale this per body
    /// kind to get the on-screen size.
    #[serde(default = "default_native_size")]
    pub native_size: f32,
}

fn default_span() -> u32 {
    1
}

fn default_native_size() -> f32 {
    256.0
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
