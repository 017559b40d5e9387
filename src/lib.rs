// Rusted Jump: a jump controller with input buffering, coyote time and air jumps

pub mod core;
pub mod engine;
pub mod game;
