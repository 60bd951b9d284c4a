use glam::Vec2;
use rapier2d::na;
use rapier2d::prelude::*;
use std::sync::Mutex;

use crate::api::types::EntityId;

// ---------------------------------------------------------------------------
// Conversion helpers (private): glam ↔ nalgebra
// ---------------------------------------------------------------------------

fn vec2_to_na(v: Vec2) -> na::Vector2<f32> {
    na::Vector2::new(v.x, v.y)
}

fn na_to_vec2(v: &na::Vector2<f32>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

fn na_iso_to_pos_rot(iso: &na::Isometry2<f32>) -> (Vec2, f32) {
    let pos = Vec2::new(iso.translation.x, iso.translation.y);
    let rot = iso.rotation.angle();
    (pos, rot)
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Mobility of a rigid body. Fixed bodies ignore forces and never move;
/// dynamic bodies are integrated by every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Dynamic,
    Fixed,
}

impl BodyType {
    fn to_rapier(self) -> RigidBodyType {
        match self {
            BodyType::Dynamic => RigidBodyType::Dynamic,
            BodyType::Fixed => RigidBodyType::Fixed,
        }
    }

    fn from_rapier(body_type: RigidBodyType) -> Self {
        match body_type {
            RigidBodyType::Dynamic => BodyType::Dynamic,
            _ => BodyType::Fixed,
        }
    }
}

/// Shape description for a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderDesc {
    Ball { radius: f32 },
    Cuboid { half_width: f32, half_height: f32 },
}

impl ColliderDesc {
    fn build_collider(&self) -> ColliderBuilder {
        match *self {
            ColliderDesc::Ball { radius } => ColliderBuilder::ball(radius),
            ColliderDesc::Cuboid { half_width, half_height } => {
                ColliderBuilder::cuboid(half_width, half_height)
            }
        }
    }
}

/// Physical material properties for a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderMaterial {
    pub restitution: f32,
    pub friction: f32,
    pub density: f32,
}

impl Default for ColliderMaterial {
    fn default() -> Self {
        Self {
            restitution: 0.3,
            friction: 0.5,
            density: 1.0,
        }
    }
}

/// Builder for describing a rigid body before creation.
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub body_type: BodyType,
    pub position: Vec2,
    pub velocity: Vec2,
    pub angular_velocity: f32,
    pub collider: ColliderDesc,
    pub linear_damping: f32,
    pub angular_damping: f32,
}

impl BodyDesc {
    /// Create a dynamic body description with the given collider shape.
    pub fn dynamic(collider: ColliderDesc) -> Self {
        Self {
            body_type: BodyType::Dynamic,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            collider,
            linear_damping: 0.0,
            angular_damping: 0.0,
        }
    }

    /// Create a fixed (static) body description with the given collider shape.
    pub fn fixed(collider: ColliderDesc) -> Self {
        Self {
            body_type: BodyType::Fixed,
            ..Self::dynamic(collider)
        }
    }

    /// Override the mobility. A body described as dynamic but created fixed
    /// keeps its damping and can later be released with
    /// [`PhysicsWorld::set_body_type`].
    pub fn with_body_type(mut self, body_type: BodyType) -> Self {
        self.body_type = body_type;
        self
    }

    pub fn with_position(mut self, pos: Vec2) -> Self {
        self.position = pos;
        self
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.velocity = vel;
        self
    }

    pub fn with_angular_velocity(mut self, angvel: f32) -> Self {
        self.angular_velocity = angvel;
        self
    }

    /// Set the linear damping (velocity decay). Higher values slow the body faster.
    /// Plays the role of air friction.
    pub fn with_linear_damping(mut self, damping: f32) -> Self {
        self.linear_damping = damping;
        self
    }

    /// Set the angular damping (rotation decay). Higher values slow rotation faster.
    pub fn with_angular_damping(mut self, damping: f32) -> Self {
        self.angular_damping = damping;
        self
    }
}

/// Handle pair stored on an Entity, referencing Rapier internals.
#[derive(Debug, Clone, Copy)]
pub struct PhysicsBody {
    pub body_handle: RigidBodyHandle,
    pub collider_handle: ColliderHandle,
}

/// A collision event between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub entity_a: EntityId,
    pub entity_b: EntityId,
    /// `true` when the collision just started, `false` when it ended.
    pub started: bool,
}

impl CollisionPair {
    /// A collision-start pair.
    pub fn started(entity_a: EntityId, entity_b: EntityId) -> Self {
        Self { entity_a, entity_b, started: true }
    }
}

// ---------------------------------------------------------------------------
// WASM-safe event collector (no crossbeam)
// ---------------------------------------------------------------------------

struct DirectEventCollector {
    collisions: Mutex<Vec<CollisionEvent>>,
}

impl DirectEventCollector {
    fn new() -> Self {
        Self {
            collisions: Mutex::new(Vec::new()),
        }
    }

    fn drain_collisions(&self) -> Vec<CollisionEvent> {
        // Single-threaded on wasm; a poisoned lock still holds valid events.
        let mut guard = self
            .collisions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *guard)
    }
}

impl EventHandler for DirectEventCollector {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        self.collisions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }

    fn handle_contact_force_event(
        &self,
        _dt: f32,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: f32,
    ) {
    }
}

// ---------------------------------------------------------------------------
// PhysicsWorld
// ---------------------------------------------------------------------------

/// Wraps all Rapier2D boilerplate into a single, easy-to-use struct.
pub struct PhysicsWorld {
    gravity: na::Vector2<f32>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    pub(crate) bodies: RigidBodySet,
    pub(crate) colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    event_collector: DirectEventCollector,
}

impl PhysicsWorld {
    /// Create a new physics world with the given gravity vector.
    /// The world is Y-down: use positive Y for downward gravity
    /// (e.g., `Vec2::new(0.0, 300.0)` for a gentle fall in pixels/s²).
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity: vec2_to_na(gravity),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            event_collector: DirectEventCollector::new(),
        }
    }

    /// Set the integration timestep.
    pub fn set_dt(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
    }

    /// Create a rigid body + collider and return handles.
    /// The EntityId is stored in the body's `user_data` for collision lookups.
    pub fn create_body(
        &mut self,
        entity_id: EntityId,
        desc: &BodyDesc,
        material: ColliderMaterial,
    ) -> PhysicsBody {
        let rb = RigidBodyBuilder::new(desc.body_type.to_rapier())
            .translation(vec2_to_na(desc.position))
            .linvel(vec2_to_na(desc.velocity))
            .angvel(desc.angular_velocity)
            .linear_damping(desc.linear_damping)
            .angular_damping(desc.angular_damping)
            .user_data(entity_id.0 as u128)
            .build();

        let body_handle = self.bodies.insert(rb);

        let collider = desc
            .collider
            .build_collider()
            .restitution(material.restitution)
            .friction(material.friction)
            .density(material.density)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build();

        let collider_handle =
            self.colliders
                .insert_with_parent(collider, body_handle, &mut self.bodies);

        PhysicsBody {
            body_handle,
            collider_handle,
        }
    }

    /// Step the simulation and collect collision events into the provided Vec.
    /// Pairs are appended in the order Rapier reported them.
    pub fn step_into(&mut self, collision_events: &mut Vec<CollisionPair>) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &self.event_collector,
        );

        // Drain collision events and resolve entity IDs from user_data
        for event in self.event_collector.drain_collisions() {
            let (h1, h2, started) = match event {
                CollisionEvent::Started(h1, h2, _) => (h1, h2, true),
                CollisionEvent::Stopped(h1, h2, _) => (h1, h2, false),
            };

            let entity_a = self.collider_to_entity(h1);
            let entity_b = self.collider_to_entity(h2);

            match (entity_a, entity_b) {
                (Some(a), Some(b)) => collision_events.push(CollisionPair {
                    entity_a: a,
                    entity_b: b,
                    started,
                }),
                // One side was removed during the step.
                _ => log::debug!("physics: dropped collision event for a removed collider"),
            }
        }
    }

    /// Switch a body between fixed and dynamic. Wakes the body up.
    pub fn set_body_type(&mut self, body: &PhysicsBody, body_type: BodyType) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            rb.set_body_type(body_type.to_rapier(), true);
        }
    }

    /// Current mobility of a body. Missing bodies report `Fixed`.
    pub fn body_type(&self, body: &PhysicsBody) -> BodyType {
        self.bodies
            .get(body.body_handle)
            .map(|rb| BodyType::from_rapier(rb.body_type()))
            .unwrap_or(BodyType::Fixed)
    }

    /// Set the linear velocity of a body directly.
    pub fn set_velocity(&mut self, body: &PhysicsBody, vel: Vec2) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            rb.set_linvel(vec2_to_na(vel), true);
        }
    }

    /// Get the current linear velocity of a body.
    pub fn velocity(&self, body: &PhysicsBody) -> Vec2 {
        self.bodies
            .get(body.body_handle)
            .map(|rb| na_to_vec2(rb.linvel()))
            .unwrap_or(Vec2::ZERO)
    }

    /// Set the angular velocity of a body in radians per second.
    pub fn set_angular_velocity(&mut self, body: &PhysicsBody, angvel: f32) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            rb.set_angvel(angvel, true);
        }
    }

    /// Get the current angular velocity of a body in radians per second.
    pub fn angular_velocity(&self, body: &PhysicsBody) -> f32 {
        self.bodies
            .get(body.body_handle)
            .map(|rb| rb.angvel())
            .unwrap_or(0.0)
    }

    /// Get the current position and rotation of a body.
    pub fn body_position(&self, body: &PhysicsBody) -> (Vec2, f32) {
        self.bodies
            .get(body.body_handle)
            .map(|rb| na_iso_to_pos_rot(rb.position()))
            .unwrap_or((Vec2::ZERO, 0.0))
    }

    /// Number of rigid bodies in the simulation.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    // -- private helpers --

    fn collider_to_entity(&self, collider_handle: ColliderHandle) -> Option<EntityId> {
        let collider = self.colliders.get(collider_handle)?;
        let body_handle = collider.parent()?;
        let body = self.bodies.get(body_handle)?;
        Some(EntityId(body.user_data as u32))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
