// Jump system
//
// Turns jump-action edges plus ground contact into impulse commands:
// - `config`: validated tuning (cooldown, coyote time, buffer window, air jumps)
// - `state`: the jump states
// - `context`: per-entity mutable jump data
// - `machine`: the tick-by-tick transition function
// - `command`: impulse commands, tick outcomes and the physics sink boundary
// - `controller`: one entity's binding + machine + context
// - `body_sink`: applies impulses to a rapier2d body

pub mod body_sink;
pub mod command;
pub mod config;
pub mod context;
pub mod controller;
pub mod machine;
pub mod state;

// Re-export commonly used types
pub use body_sink::BodyImpulseSink;
pub use command::{Decision, DiscardReason, ImpulseCommand, PhysicsSink, TickOutcome};
pub use config::JumpConfig;
pub use context::JumpContext;
pub use controller::{EntityId, JumpController};
pub use machine::{JumpStateMachine, TickInput};
pub use state::JumpState;
