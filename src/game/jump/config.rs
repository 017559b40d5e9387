// Jump tuning

use crate::core::error::{require_non_negative, require_positive};
use crate::core::ConfigError;

/// Numeric tuning for the jump state machine
///
/// Durations are in seconds. Build with `Default` plus the `with_*` methods,
/// then pass through `validate` (the state machine does this on construction).
///
/// Cooldown, coyote and buffer countdowns start on the tick after they are
/// armed, so each one also covers the tick it was armed on. With 0.1 s ticks
/// a 0.5 s cooldown set on tick 0 first lets a jump through on tick 6.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpConfig {
    /// Minimum time between two jumps
    pub cooldown_seconds: f32,
    /// Grace period after walking off a ledge during which a ground jump is still allowed
    pub coyote_seconds: f32,
    /// How long an early press is held before it is discarded
    pub buffer_window_seconds: f32,
    /// Jumps allowed while airborne before landing again
    pub max_air_jumps: u32,
    /// Impulse magnitude handed to the physics sink
    pub jump_impulse_magnitude: f32,
}

/// Shipped tuning
pub const DEFAULT_JUMP_CONFIG: JumpConfig = JumpConfig {
    cooldown_seconds: 0.2,
    coyote_seconds: 0.1,
    buffer_window_seconds: 0.1,
    max_air_jumps: 1,
    jump_impulse_magnitude: 30.0,
};

impl Default for JumpConfig {
    fn default() -> Self {
        DEFAULT_JUMP_CONFIG
    }
}

impl JumpConfig {
    pub fn with_cooldown(mut self, seconds: f32) -> Self {
        self.cooldown_seconds = seconds;
        self
    }

    pub fn with_coyote(mut self, seconds: f32) -> Self {
        self.coyote_seconds = seconds;
        self
    }

    pub fn with_buffer_window(mut self, seconds: f32) -> Self {
        self.buffer_window_seconds = seconds;
        self
    }

    pub fn with_max_air_jumps(mut self, count: u32) -> Self {
        self.max_air_jumps = count;
        self
    }

    pub fn with_impulse(mut self, magnitude: f32) -> Self {
        self.jump_impulse_magnitude = magnitude;
        self
    }

    /// Check every range; the first offending field is reported
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("cooldown_seconds", self.cooldown_seconds)?;
        require_non_negative("coyote_seconds", self.coyote_seconds)?;
        require_non_negative("buffer_window_seconds", self.buffer_window_seconds)?;
        require_positive("jump_impulse_magnitude", self.jump_impulse_magnitude)?;
        Ok(())
    }
}
