//! The brain impact: two fragments appear, brains are pushed apart, and every
//! glyph that has not reacted yet gets a slow settling spin.

use glam::Vec2;
use glyphfall_engine::EngineContext;

use crate::config::StageConfig;
use crate::spawner::{spawn_actor, ActorSpec};
use crate::stage::{BodyKind, Stage};

/// Run the explosion at `impact`. Does nothing once the latch is set;
/// returns whether it fired.
pub fn explode(
    ctx: &mut EngineContext,
    stage: &mut Stage,
    impact: Vec2,
    config: &StageConfig,
) -> bool {
    if !stage.latch_explosion() {
        return false;
    }

    let offset = Vec2::new(config.fragment_offset, 0.0);
    spawn_actor(
        ctx,
        stage,
        ActorSpec {
            kind: BodyKind::FragmentA,
            pos: impact - offset,
            velocity: Vec2::ZERO,
            radius: config.fragment_a_radius,
            material: config.fragment_material,
        },
        config.actor_damping,
    );
    spawn_actor(
        ctx,
        stage,
        ActorSpec {
            kind: BodyKind::FragmentB,
            pos: impact + offset,
            velocity: Vec2::ZERO,
            radius: config.fragment_b_radius,
            material: config.fragment_material,
        },
        config.actor_damping,
    );

    for id in stage.brain_ids() {
        let Some(pos) = ctx.scene.get(id).map(|e| e.pos) else {
            continue;
        };
        let away = pos - impact;
        let angle = away.y.atan2(away.x);
        ctx.set_velocity(id, Vec2::new(angle.cos(), angle.sin()) * config.push);
        let spin = ctx.rng.range(-config.brain_spin, 0.0);
        ctx.set_angular_velocity(id, spin);
    }

    let mut settled = 0;
    for glyph in stage.glyphs_mut() {
        if !glyph.mark_reacted() {
            continue;
        }
        let spin = ctx.rng.range(-config.settle_spin, 0.0);
        ctx.set_angular_velocity(glyph.id, spin);
        settled += 1;
    }

    log::info!(
        "explosion at ({:.0}, {:.0}), {} glyphs settled",
        impact.x,
        impact.y,
        settled
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout_glyphs, spawn_glyphs, LayoutParams};
    use crate::spawner::spawn_brains;
    use glyphfall_engine::GameConfig;

    fn exploded_stage() -> (EngineContext, Stage, StageConfig) {
        let config = StageConfig::default().with_text("abcd");
        let mut ctx = EngineContext::from_config(&GameConfig {
            world_width: 1280.0,
            world_height: 720.0,
            ..GameConfig::default()
        });
        let mut stage = Stage::new();
        let params = LayoutParams::for_world(&config, ctx.world_size());
        let placed = layout_glyphs(&config.text, &params);
        spawn_glyphs(&mut ctx, &mut stage, &placed, &config);
        spawn_brains(&mut ctx, &mut stage, &config);
        (ctx, stage, config)
    }

    #[test]
    fn fragments_flank_the_impact() {
        let (mut ctx, mut stage, config) = exploded_stage();
        let impact = Vec2::new(640.0, 365.0);

        assert!(explode(&mut ctx, &mut stage, impact, &config));

        let actors = stage.actors();
        assert_eq!(actors.len(), 4);
        assert_eq!(actors[2].kind, BodyKind::FragmentA);
        assert_eq!(actors[3].kind, BodyKind::FragmentB);
        assert_eq!(ctx.scene.get(actors[2].id).unwrap().pos, Vec2::new(610.0, 365.0));
        assert_eq!(ctx.scene.get(actors[3].id).unwrap().pos, Vec2::new(670.0, 365.0));
        assert_eq!(actors[2].radius, 20.0);
        assert_eq!(actors[3].radius, 80.0);
    }

    #[test]
    fn brains_are_pushed_away_with_anisotropic_scale() {
        let (mut ctx, mut stage, config) = exploded_stage();
        let left = stage.actors()[0].id;
        let right = stage.actors()[1].id;
        // Left brain sits at (-120, 360), right at (1400, 370).
        explode(&mut ctx, &mut stage, Vec2::new(640.0, 365.0), &config);

        let vl = ctx.velocity(left);
        let vr = ctx.velocity(right);
        assert!(vl.x < 0.0 && vl.x >= -config.push.x);
        assert!(vr.x > 0.0 && vr.x <= config.push.x);
        assert!(vl.y.abs() <= config.push.y && vr.y.abs() <= config.push.y);

        for id in [left, right] {
            let spin = ctx.angular_velocity(id);
            assert!(spin <= 0.0 && spin >= -config.brain_spin);
        }
    }

    #[test]
    fn unreacted_glyphs_settle_and_reacted_ones_keep_their_spin() {
        let (mut ctx, mut stage, config) = exploded_stage();
        let first = stage.glyphs()[0].id;
        stage.glyphs_mut()[0].mark_reacted();
        ctx.set_angular_velocity(first, 5.0);

        explode(&mut ctx, &mut stage, Vec2::new(640.0, 365.0), &config);

        assert!((ctx.angular_velocity(first) - 5.0).abs() < 1e-4);
        for glyph in &stage.glyphs()[1..] {
            assert!(glyph.reacted());
            let spin = ctx.angular_velocity(glyph.id);
            assert!(spin <= 0.0 && spin >= -config.settle_spin);
        }
    }

    #[test]
    fn second_explosion_is_a_no_op() {
        let (mut ctx, mut stage, config) = exploded_stage();
        assert!(explode(&mut ctx, &mut stage, Vec2::new(640.0, 365.0), &config));
        let bodies = ctx.physics.body_count();

        assert!(!explode(&mut ctx, &mut stage, Vec2::new(100.0, 100.0), &config));
        assert_eq!(ctx.physics.body_count(), bodies);
        assert_eq!(stage.actors().len(), 4);
    }
}
