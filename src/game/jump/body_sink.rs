// Physics sink backed by a rapier2d rigid body

use super::command::{ImpulseCommand, PhysicsSink};
use crate::engine::physics::{PhysicsWorld, RigidBodyHandle};
use log::warn;

/// Applies jump commands to one rigid body
///
/// The magnitude is used as the new upward velocity, so a jump feels the same
/// whether the body was rising or falling.
pub struct BodyImpulseSink<'w> {
    world: &'w mut PhysicsWorld,
    body: RigidBodyHandle,
}

impl<'w> BodyImpulseSink<'w> {
    pub fn new(world: &'w mut PhysicsWorld, body: RigidBodyHandle) -> Self {
        Self { world, body }
    }
}

impl PhysicsSink for BodyImpulseSink<'_> {
    fn apply_impulse(&mut self, command: &ImpulseCommand) {
        let Some(body) = self.world.get_rigid_body_mut(self.body) else {
            warn!(
                "Tick {}: jump impulse for missing body {:?} dropped",
                command.tick, self.body
            );
            return;
        };

        let mut velocity = *body.linvel();
        velocity.y = command.magnitude;
        body.set_linvel(velocity, true);
    }
}
