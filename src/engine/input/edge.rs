// Edge detection: turns signal levels into press/release events

use super::signal::InputSignal;
use crate::core::ConfigError;

/// Default analog activation threshold
pub const DEFAULT_ACTIVATION_THRESHOLD: f32 = 0.5;

/// A transition of an input signal between two consecutive ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Edge {
    #[default]
    None,
    Pressed,
    Released,
}

impl Edge {
    pub fn is_pressed(&self) -> bool {
        matches!(self, Self::Pressed)
    }

    pub fn is_released(&self) -> bool {
        matches!(self, Self::Released)
    }

    /// Edge between two activity levels
    pub fn between(was_active: bool, is_active: bool) -> Self {
        match (was_active, is_active) {
            (false, true) => Self::Pressed,
            (true, false) => Self::Released,
            _ => Self::None,
        }
    }
}

/// Converts sample pairs into edges
///
/// Stateless: the caller keeps the previous sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeDetector {
    activation_threshold: f32,
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self {
            activation_threshold: DEFAULT_ACTIVATION_THRESHOLD,
        }
    }
}

impl EdgeDetector {
    /// Create a detector with a custom analog activation threshold in `(0, 1]`
    pub fn new(activation_threshold: f32) -> Result<Self, ConfigError> {
        if !activation_threshold.is_finite()
            || activation_threshold <= 0.0
            || activation_threshold > 1.0
        {
            return Err(ConfigError::InvalidThreshold(activation_threshold));
        }
        Ok(Self {
            activation_threshold,
        })
    }

    pub fn activation_threshold(&self) -> f32 {
        self.activation_threshold
    }

    /// Whether a single sample counts as held
    pub fn is_active(&self, signal: InputSignal) -> bool {
        signal.is_active(self.activation_threshold)
    }

    pub fn detect(&self, previous: InputSignal, current: InputSignal) -> Edge {
        Edge::between(self.is_active(previous), self.is_active(current))
    }
}

/// Detect an edge with the default analog threshold
pub fn detect(previous: InputSignal, current: InputSignal) -> Edge {
    EdgeDetector::default().detect(previous, current)
}
