// Gameplay systems

pub mod jump;
