// Bodies used by the jump demo: a capsule jumper and box ground slabs

use super::collision::CollisionGroups;
use rapier2d::prelude::*;

pub use rapier2d::prelude::RigidBodyHandle;

/// Extent of a jumper's capsule in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumperShape {
    pub width: Real,
    pub height: Real,
}

impl JumperShape {
    pub fn new(width: Real, height: Real) -> Self {
        Self { width, height }
    }

    /// Distance from the body's center down to its feet
    pub fn half_height(&self) -> Real {
        self.height / 2.0
    }

    /// Dynamic body that never rotates or sleeps, so ground probes stay valid
    pub(super) fn body(&self, x: Real, y: Real) -> RigidBody {
        RigidBodyBuilder::dynamic()
            .translation(vector![x, y])
            .lock_rotations()
            .can_sleep(false)
            .build()
    }

    pub(super) fn collider(&self) -> Collider {
        let radius = self.width / 2.0;
        // capsule_y takes the half-height of the straight segment only
        let segment = (self.half_height() - radius).max(0.0);

        ColliderBuilder::capsule_y(segment, radius)
            .collision_groups(CollisionGroups::Jumper.to_interaction_groups())
            .friction(0.0)
            .build()
    }
}

/// Fixed box whose center sits at `(x, y)`
pub(super) fn ground_body(x: Real, y: Real) -> RigidBody {
    RigidBodyBuilder::fixed().translation(vector![x, y]).build()
}

pub(super) fn ground_collider(width: Real, height: Real) -> Collider {
    ColliderBuilder::cuboid(width / 2.0, height / 2.0)
        .collision_groups(CollisionGroups::Ground.to_interaction_groups())
        .friction(0.3)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jumper_body_is_upright_and_awake() {
        let body = JumperShape::new(1.0, 2.0).body(3.0, 4.0);

        assert_eq!(body.body_type(), RigidBodyType::Dynamic);
        assert!(body.is_rotation_locked());
        assert_eq!(body.translation().x, 3.0);
        assert_eq!(body.translation().y, 4.0);
    }

    #[test]
    fn test_jumper_collider_spans_full_height() {
        let collider = JumperShape::new(1.0, 2.0).collider();
        let aabb = collider.compute_aabb();

        assert!((aabb.maxs.y - aabb.mins.y - 2.0).abs() < 1e-4);
        assert!((aabb.maxs.x - aabb.mins.x - 1.0).abs() < 1e-4);
        assert_eq!(collider.friction(), 0.0);
    }

    #[test]
    fn test_ground_is_fixed() {
        let body = ground_body(0.0, -1.0);
        assert_eq!(body.body_type(), RigidBodyType::Fixed);
        assert_eq!(ground_collider(4.0, 1.0).friction(), 0.3);
    }
}
