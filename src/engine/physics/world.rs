use super::body::{ground_body, ground_collider, JumperShape};
use rapier2d::prelude::*;

/// Downward acceleration applied to every dynamic body
const GRAVITY: Real = -9.81;

/// How far below the feet a ground probe still counts as contact
pub const GROUND_PROBE_DISTANCE: Real = 0.1;

/// Rapier simulation owning the jumper and the ground it stands on
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,

    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,

    /// Refreshed on every `step`; ground probes read it
    query_pipeline: QueryPipeline,

    bodies: RigidBodySet,
    colliders: ColliderSet,
}

impl PhysicsWorld {
    /// Empty world stepping at 1/60 s, matching the default tick rate
    pub fn new() -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = 1.0 / 60.0;

        Self {
            gravity: vector![0.0, GRAVITY],
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
        }
    }

    /// Advance the simulation by one timestep
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Add a ground slab of `width` x `height` centered on `(x, y)`
    pub fn spawn_ground(&mut self, x: Real, y: Real, width: Real, height: Real) -> RigidBodyHandle {
        let handle = self.bodies.insert(ground_body(x, y));
        self.colliders
            .insert_with_parent(ground_collider(width, height), handle, &mut self.bodies);
        handle
    }

    /// Add a jumper whose center starts at `(x, y)`
    pub fn spawn_jumper(&mut self, shape: JumperShape, x: Real, y: Real) -> RigidBodyHandle {
        let handle = self.bodies.insert(shape.body(x, y));
        self.colliders
            .insert_with_parent(shape.collider(), handle, &mut self.bodies);
        log::debug!("Spawned jumper {:?} at ({}, {})", handle, x, y);
        handle
    }

    /// Move a body to `(x, y)` and stop it
    ///
    /// Returns false if the body does not exist.
    pub fn teleport(&mut self, handle: RigidBodyHandle, x: Real, y: Real) -> bool {
        let Some(body) = self.bodies.get_mut(handle) else {
            return false;
        };
        body.set_translation(vector![x, y], true);
        body.set_linvel(Vector::zeros(), true);
        true
    }

    pub fn get_rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle)
    }

    pub fn get_rigid_body_mut(&mut self, handle: RigidBodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(handle)
    }

    /// Ground-contact probe for a body whose feet sit `half_height` below its center
    ///
    /// Casts a short ray down from just above the feet, ignoring the body itself.
    /// Only sees colliders present at the last `step`.
    pub fn is_grounded(&self, handle: RigidBodyHandle, half_height: Real) -> bool {
        let Some(body) = self.bodies.get(handle) else {
            return false;
        };

        let feet = body.translation();
        let ray = Ray::new(
            point![feet.x, feet.y - half_height + GROUND_PROBE_DISTANCE],
            vector![0.0, -1.0],
        );

        self.query_pipeline
            .cast_ray(
                &self.bodies,
                &self.colliders,
                &ray,
                2.0 * GROUND_PROBE_DISTANCE,
                true,
                QueryFilter::default().exclude_rigid_body(handle),
            )
            .is_some()
    }

    /// Set the simulation timestep in seconds
    pub fn set_timestep(&mut self, dt: Real) {
        self.integration_parameters.dt = dt;
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
