// Per-tick input signal snapshots

use super::action::InputSource;
use std::collections::HashMap;

/// Raw value of a physical control for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputSignal {
    Digital(bool),
    Analog(f32),
}

impl Default for InputSignal {
    fn default() -> Self {
        Self::Digital(false)
    }
}

impl InputSignal {
    /// Whether the signal counts as "held" for the given analog threshold
    ///
    /// Digital signals ignore the threshold. NaN analog values are inactive.
    pub fn is_active(&self, threshold: f32) -> bool {
        match *self {
            Self::Digital(pressed) => pressed,
            Self::Analog(value) => value >= threshold,
        }
    }
}

impl From<bool> for InputSignal {
    fn from(pressed: bool) -> Self {
        Self::Digital(pressed)
    }
}

impl From<f32> for InputSignal {
    fn from(value: f32) -> Self {
        Self::Analog(value)
    }
}

/// Snapshot of every physical control for a single tick
///
/// Sources that were never reported read as released.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInputs {
    signals: HashMap<InputSource, InputSignal>,
}

impl TickInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, handy for scripted input
    pub fn with(mut self, source: InputSource, signal: impl Into<InputSignal>) -> Self {
        self.set(source, signal);
        self
    }

    pub fn set(&mut self, source: InputSource, signal: impl Into<InputSignal>) {
        self.signals.insert(source, signal.into());
    }

    /// Get the signal for a source (released if unknown)
    pub fn signal(&self, source: InputSource) -> InputSignal {
        self.signals.get(&source).copied().unwrap_or_default()
    }
}
