//! Keeps entity appearance in step with the stage: revealed glyphs become
//! visible, actors get their manifest sprite at their kind's scale.

use glyphfall_engine::EngineContext;

use crate::config::StageConfig;
use crate::stage::{BodyKind, Stage};

#[derive(Debug, Default)]
pub struct SpriteBinder {
    /// Sprites already reported missing, so each is logged once.
    missing: Vec<&'static str>,
}

impl SpriteBinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync(&mut self, ctx: &mut EngineContext, stage: &Stage, config: &StageConfig) {
        for (index, glyph) in stage.glyphs().iter().enumerate() {
            if let Some(entity) = ctx.scene.get_mut(glyph.id) {
                entity.visible = stage.is_revealed(index);
            }
        }

        for actor in stage.actors() {
            let Some(name) = actor.kind.sprite_name() else {
                continue;
            };
            let bound = ctx
                .scene
                .get(actor.id)
                .map_or(true, |e| e.sprite.is_some());
            if bound {
                continue;
            }
            let Some(registered) = ctx.sprites.get(name).cloned() else {
                if !self.missing.contains(&name) {
                    log::warn!("visuals: sprite '{}' not in manifest, drawing nothing", name);
                    self.missing.push(name);
                }
                continue;
            };
            if let Some(entity) = ctx.scene.get_mut(actor.id) {
                entity.size = registered.native_size * sprite_scale(actor.kind, config);
                entity.sprite = Some(registered.sprite);
            }
        }
    }
}

/// On-screen size of a kind's image relative to its source size.
pub fn sprite_scale(kind: BodyKind, config: &StageConfig) -> f32 {
    match kind {
        BodyKind::BrainLeft | BodyKind::BrainRight => config.brain_sprite_scale,
        BodyKind::FragmentA | BodyKind::FragmentB => config.fragment_sprite_scale,
        BodyKind::Glyph(_) => 1.0,
    }
}
