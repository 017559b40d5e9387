// Outbound jump commands and per-tick outcomes

use super::state::JumpState;
use crate::engine::input::Action;

/// Request to apply a jump impulse, the core's only outbound effect
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpulseCommand {
    pub action: Action,
    pub magnitude: f32,
    pub tick: u64,
}

/// Receives impulse commands; implemented by whatever owns the physics
pub trait PhysicsSink {
    fn apply_impulse(&mut self, command: &ImpulseCommand);
}

/// Recording sink
impl PhysicsSink for Vec<ImpulseCommand> {
    fn apply_impulse(&mut self, command: &ImpulseCommand) {
        self.push(*command);
    }
}

/// Why a press was dropped without firing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscardReason {
    /// The buffer window ran out before the entity could jump
    Expired,
    /// A newer press replaced it
    Overwritten,
    /// Not eligible and buffering is turned off
    BufferDisabled,
}

/// What happened to the press handled on a tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Decision {
    /// No press to handle
    #[default]
    Idle,
    /// An impulse fired
    Fired(ImpulseCommand),
    /// The press was held for later
    Buffered,
    /// The press was dropped (a no-op decision, never an error)
    Discarded(DiscardReason),
}

/// Result of one state machine tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// State after the tick
    pub state: JumpState,
    /// Decision for this tick's live or buffered press
    pub decision: Decision,
    /// An older buffered press dropped on this tick, if any
    pub dropped: Option<DiscardReason>,
}

impl TickOutcome {
    pub fn impulse(&self) -> Option<&ImpulseCommand> {
        match &self.decision {
            Decision::Fired(command) => Some(command),
            _ => None,
        }
    }

    pub fn fired(&self) -> bool {
        self.impulse().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_records_commands() {
        let mut sink: Vec<ImpulseCommand> = Vec::new();
        let command = ImpulseCommand {
            action: Action::Jump,
            magnitude: 10.0,
            tick: 4,
        };
        sink.apply_impulse(&command);
        assert_eq!(sink, vec![command]);
    }

    #[test]
    fn test_outcome_impulse_accessor() {
        let command = ImpulseCommand {
            action: Action::Jump,
            magnitude: 1.0,
            tick: 0,
        };
        let fired = TickOutcome {
            state: JumpState::JumpStartup,
            decision: Decision::Fired(command),
            dropped: None,
        };
        assert_eq!(fired.impulse(), Some(&command));

        let idle = TickOutcome {
            state: JumpState::Grounded,
            decision: Decision::Idle,
            dropped: None,
        };
        assert!(!idle.fired());
    }
}
