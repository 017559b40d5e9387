// Per-entity jump data

use super::config::JumpConfig;
use super::state::JumpState;
use crate::core::math::Countdown;
use crate::engine::input::PressBuffer;

/// Mutable jump data owned by one controlled entity
///
/// Only `JumpStateMachine` writes to it; everything else reads through the
/// accessors.
#[derive(Debug, Clone)]
pub struct JumpContext {
    pub(super) state: JumpState,
    pub(super) air_jumps_remaining: u32,
    pub(super) coyote: Countdown,
    pub(super) cooldown: Countdown,
    pub(super) buffer: PressBuffer,
    pub(super) last_jump_tick: Option<u64>,
    pub(super) impulses_fired: u64,
}

impl JumpContext {
    /// Fresh context: grounded, full air jumps, every timer stopped
    pub(super) fn new(config: &JumpConfig) -> Self {
        Self {
            state: JumpState::Grounded,
            air_jumps_remaining: config.max_air_jumps,
            coyote: Countdown::default(),
            cooldown: Countdown::default(),
            buffer: PressBuffer::new(),
            last_jump_tick: None,
            impulses_fired: 0,
        }
    }

    pub fn state(&self) -> JumpState {
        self.state
    }

    pub fn air_jumps_remaining(&self) -> u32 {
        self.air_jumps_remaining
    }

    pub fn coyote_remaining(&self) -> f32 {
        self.coyote.remaining()
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown.remaining()
    }

    /// Seconds left on the buffered press, if one is held
    pub fn buffered_remaining(&self) -> Option<f32> {
        self.buffer.peek().map(|press| press.remaining())
    }

    pub fn has_buffered_press(&self) -> bool {
        !self.buffer.is_empty()
    }

    pub fn last_jump_tick(&self) -> Option<u64> {
        self.last_jump_tick
    }

    /// Total impulses fired since creation or the last reset
    pub fn impulses_fired(&self) -> u64 {
        self.impulses_fired
    }
}
