// Jump states

use std::fmt;

/// Where an entity is in the jump cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JumpState {
    /// Standing on ground, free to jump
    #[default]
    Grounded,
    /// In the air (falling, rising after startup, or walked off a ledge)
    Airborne,
    /// The single tick on which an impulse fired
    JumpStartup,
    /// On ground, waiting for the re-jump cooldown to finish
    Cooldown,
}

impl JumpState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grounded => "grounded",
            Self::Airborne => "airborne",
            Self::JumpStartup => "jump_startup",
            Self::Cooldown => "cooldown",
        }
    }
}

impl fmt::Display for JumpState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_grounded() {
        assert_eq!(JumpState::default(), JumpState::Grounded);
    }

    #[test]
    fn test_display() {
        assert_eq!(JumpState::JumpStartup.to_string(), "jump_startup");
    }
}
