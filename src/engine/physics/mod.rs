// Physics boundary using rapier2d
//
// The jump core only emits impulse commands; this module owns the bodies
// they are applied to and reports ground contact back.

mod body;
mod collision;
mod world;

pub use body::{JumperShape, RigidBodyHandle};
pub use collision::CollisionGroups;
pub use world::{PhysicsWorld, GROUND_PROBE_DISTANCE};

// Re-export commonly used rapier types for convenience
pub use rapier2d::prelude::Real;
