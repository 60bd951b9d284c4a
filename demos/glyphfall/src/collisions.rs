//! Contact handling for one physics step's worth of collision pairs.

use glam::Vec2;
use glyphfall_engine::api::types::EntityId;
use glyphfall_engine::{CollisionPair, EngineContext};

use crate::config::StageConfig;
use crate::explosion::explode;
use crate::stage::{is_brain_pair, BodyKind, Stage};

/// Process `pairs` in delivery order. Returns the impact point if the brain
/// collision fired the explosion during this batch.
pub fn dispatch_collisions(
    ctx: &mut EngineContext,
    stage: &mut Stage,
    pairs: &[CollisionPair],
    config: &StageConfig,
) -> Option<Vec2> {
    let mut impact = None;

    for pair in pairs.iter().filter(|p| p.started) {
        let (a, b) = (pair.entity_a, pair.entity_b);

        if !stage.explosion_fired() && is_brain_pair(stage.kind_of(a), stage.kind_of(b)) {
            let midpoint = (position(ctx, a) + position(ctx, b)) / 2.0;
            if explode(ctx, stage, midpoint, config) {
                impact = Some(midpoint);
            }
        }

        react_on_first_contact(ctx, stage, a, config);
        react_on_first_contact(ctx, stage, b, config);
    }

    impact
}

/// Glyphs spin up on their first contact with anything. Other kinds and
/// untracked bodies are ignored.
fn react_on_first_contact(
    ctx: &mut EngineContext,
    stage: &mut Stage,
    id: EntityId,
    config: &StageConfig,
) {
    let Some(body) = stage.body_mut(id) else {
        return;
    };
    if !matches!(body.kind, BodyKind::Glyph(_)) || !body.mark_reacted() {
        return;
    }
    let spin = ctx.rng.range(-config.glyph_spin, config.glyph_spin);
    ctx.set_angular_velocity(id, spin);
}

fn position(ctx: &EngineContext, id: EntityId) -> Vec2 {
    ctx.scene.get(id).map(|e| e.pos).unwrap_or(Vec2::ZERO)
}
