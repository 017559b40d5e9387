use rapier2d::prelude::*;

/// Collision groups for filtering what objects can collide with each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Jumping characters
    Jumper = 0b0000_0001,

    /// Static ground and platforms
    Ground = 0b0000_0010,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // Jumpers stand on ground but pass through each other
            CollisionGroups::Jumper => Group::from_bits_truncate(CollisionGroups::Ground as u32),
            CollisionGroups::Ground => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }
}
