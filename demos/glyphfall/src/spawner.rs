//! Brain entry: two large circles fly in from the sides while every glyph is
//! let go.

use glam::Vec2;
use glyphfall_engine::api::types::EntityId;
use glyphfall_engine::{BodyDesc, BodyType, ColliderDesc, ColliderMaterial, EngineContext, Entity};

use crate::config::StageConfig;
use crate::stage::{BodyKind, Mobility, Stage, StageBody};

/// Physical parameters of a brain or fragment.
pub(crate) struct ActorSpec {
    pub kind: BodyKind,
    pub pos: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub material: ColliderMaterial,
}

/// Insert a dynamic actor body and track it on the stage. Its sprite is
/// attached by the visuals pass.
pub(crate) fn spawn_actor(
    ctx: &mut EngineContext,
    stage: &mut Stage,
    actor: ActorSpec,
    damping: f32,
) -> EntityId {
    let id = ctx.next_id();
    let entity = Entity::new(id)
        .with_tag(actor.kind.tag())
        .with_size(2.0 * actor.radius);
    let desc = BodyDesc::dynamic(ColliderDesc::Ball {
        radius: actor.radius,
    })
    .with_position(actor.pos)
    .with_velocity(actor.velocity)
    .with_linear_damping(damping);

    ctx.spawn_with_body(entity, desc, actor.material);
    stage.push_actor(StageBody::new(id, actor.kind, actor.radius, Mobility::Dynamic));
    id
}

/// Spawn both brains just off-screen and release every glyph.
pub fn spawn_brains(ctx: &mut EngineContext, stage: &mut Stage, config: &StageConfig) {
    let world = ctx.world_size();
    let r = config.brain_radius;

    spawn_actor(
        ctx,
        stage,
        ActorSpec {
            kind: BodyKind::BrainLeft,
            pos: Vec2::new(-r, world.y / 2.0),
            velocity: Vec2::new(config.brain_speed, 0.0),
            radius: r,
            material: config.brain_material,
        },
        config.actor_damping,
    );
    spawn_actor(
        ctx,
        stage,
        ActorSpec {
            kind: BodyKind::BrainRight,
            pos: Vec2::new(world.x + r, world.y / 2.0 + config.brain_right_offset),
            velocity: Vec2::new(-config.brain_speed, 0.0),
            radius: r,
            material: config.brain_material,
        },
        config.actor_damping,
    );

    let mut released = 0;
    for glyph in stage.glyphs_mut() {
        if !glyph.release() {
            continue;
        }
        ctx.set_body_type(glyph.id, BodyType::Dynamic);
        let velocity = Vec2::new(
            ctx.rng.range(-config.release_x, config.release_x),
            ctx.rng.range(0.0, config.release_y),
        );
        ctx.set_velocity(glyph.id, velocity);
        released += 1;
    }

    log::info!("spawner: brains in, {} glyphs released", released);
}
