use std::collections::HashMap;
use crate::assets::manifest::AssetManifest;
use crate::components::sprite::{SpriteComponent, AtlasId};

/// A sprite resolved from the manifest together with its source size.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredSprite {
    pub sprite: SpriteComponent,
    pub native_size: f32,
}

/// Registry of named sprites, built from an AssetManifest.
pub struct SpriteRegistry {
    sprites: HashMap<String, RegisteredSprite>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self {
            sprites: HashMap::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let sprites = manifest
            .sprites
            .iter()
            .map(|(name, desc)| {
                let sprite = SpriteComponent {
                    atlas: AtlasId(desc.atlas),
                    col: desc.col as f32,
                    row: desc.row as f32,
                    cell_span: desc.span as f32,
                    alpha: 1.0,
                };
                let entry = RegisteredSprite {
                    sprite,
                    native_size: desc.native_size,
                };
                (name.clone(), entry)
            })
            .collect();
        Self { sprites }
    }

    /// Look up a sprite by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&RegisteredSprite> {
        self.sprites.get(name)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::new()
    }
}
