// Input handling system
//
// Turns raw window events into discrete, gated action edges.
//
// ## Architecture
//
// - `action`: action names and physical input sources
// - `signal`: per-tick snapshot of every physical control
// - `edge`: press/release detection from two consecutive samples
// - `binding`: one action bound to its sources, behind an enable/disable gate
// - `buffer`: single-slot buffer for presses that arrive too early
// - `config`: binding configuration and shipped defaults
// - `manager`: collects winit events between ticks
//
// ## Usage Example
//
// ```rust
// use rusted_jump::engine::input::{Action, BindingConfig, InputManager, Lifecycle};
//
// let mut input = InputManager::new();
// let mut jump = BindingConfig::default().binding_for(Action::Jump)?;
// jump.enable();
//
// // In your event loop
// input.process_keyboard_event(&key_event);
//
// // Once per fixed tick
// let edge = jump.poll(&input.snapshot());
// input.end_tick();
// ```

pub mod action;
pub mod binding;
pub mod buffer;
pub mod config;
pub mod edge;
pub mod manager;
pub mod signal;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use binding::{ActionBinding, Lifecycle};
pub use buffer::{BufferedPress, PressBuffer};
pub use config::BindingConfig;
pub use edge::{detect, Edge, EdgeDetector};
pub use manager::InputManager;
pub use signal::{InputSignal, TickInputs};
