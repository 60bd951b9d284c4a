//! Pointer drag: grab a moving body and pull it toward the pointer.

use glam::Vec2;
use glyphfall_engine::api::types::EntityId;
use glyphfall_engine::{EngineContext, InputEvent, InputQueue};

use crate::stage::{Mobility, Stage};

/// Soft spring between the pointer and one grabbed body.
#[derive(Debug, Clone)]
pub struct PointerDrag {
    stiffness: f32,
    grabbed: Option<EntityId>,
    target: Vec2,
}

impl PointerDrag {
    pub fn new(stiffness: f32) -> Self {
        Self {
            stiffness,
            grabbed: None,
            target: Vec2::ZERO,
        }
    }

    pub fn grabbed(&self) -> Option<EntityId> {
        self.grabbed
    }

    /// Apply this step's pointer events.
    pub fn handle_input(&mut self, ctx: &EngineContext, stage: &Stage, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    self.target = Vec2::new(x, y);
                    self.grabbed = pick(ctx, stage, self.target);
                    if let Some(id) = self.grabbed {
                        log::debug!("drag: grabbed {:?}", id);
                    }
                }
                InputEvent::PointerMove { x, y } => {
                    self.target = Vec2::new(x, y);
                }
                InputEvent::PointerUp { .. } => {
                    self.grabbed = None;
                }
            }
        }
    }

    /// Steer the grabbed body a `stiffness` fraction of the way to the
    /// pointer over the coming step.
    pub fn apply(&mut self, ctx: &mut EngineContext, dt: f32) {
        let Some(id) = self.grabbed else {
            return;
        };
        let Some(pos) = ctx.scene.get(id).map(|e| e.pos) else {
            self.grabbed = None;
            return;
        };
        if dt <= 0.0 {
            return;
        }
        ctx.set_velocity(id, (self.target - pos) * self.stiffness / dt);
    }
}

/// Nearest dynamic body whose circle contains `point`.
fn pick(ctx: &EngineContext, stage: &Stage, point: Vec2) -> Option<EntityId> {
    stage
        .bodies()
        .filter(|b| b.mobility() == Mobility::Dynamic)
        .filter_map(|b| {
            let pos = ctx.scene.get(b.id)?.pos;
            let dist = pos.distance(point);
            (dist <= b.radius).then_some((b.id, dist))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}
