// Action definitions and physical input sources

use std::fmt;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Name of the action map the jump action lives in
pub const MOVEMENT_MAP: &str = "Movement";

/// A named logical action that physical inputs are bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Jump,
}

impl Action {
    /// All known actions
    pub const ALL: [Action; 1] = [Action::Jump];

    /// The action's name as it appears in bindings
    pub fn name(&self) -> &'static str {
        match self {
            Self::Jump => "Jump",
        }
    }

    /// The action map this action belongs to
    pub fn map(&self) -> &'static str {
        match self {
            Self::Jump => MOVEMENT_MAP,
        }
    }

    /// Look up an action by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.map(), self.name())
    }
}

/// Represents a physical input source (keyboard key, mouse button, or analog axis)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
    /// Analog axis by index (e.g. a gamepad trigger), sampled in `0.0..=1.0`
    Axis(u32),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }

    /// Create an analog axis input source
    pub fn axis(index: u32) -> Self {
        Self::Axis(index)
    }
}

/// Gamepad right trigger axis index used by the default bindings
pub const RIGHT_TRIGGER_AXIS: u32 = 5;

/// Default bindings for the jump action
pub fn default_jump_sources() -> Vec<InputSource> {
    vec![
        InputSource::key(KeyCode::Space),
        InputSource::key(KeyCode::KeyW),
        InputSource::key(KeyCode::ArrowUp),
        InputSource::axis(RIGHT_TRIGGER_AXIS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_name_roundtrip() {
        assert_eq!(Action::from_name("Jump"), Some(Action::Jump));
        assert_eq!(Action::from_name("jump"), Some(Action::Jump));
        assert_eq!(Action::from_name("Duck"), None);
    }

    #[test]
    fn test_action_display_includes_map() {
        assert_eq!(Action::Jump.to_string(), "Movement/Jump");
    }

    #[test]
    fn test_input_source_creation() {
        assert_eq!(
            InputSource::key(KeyCode::Space),
            InputSource::Keyboard(KeyCode::Space)
        );
        assert_eq!(
            InputSource::mouse(MouseButton::Left),
            InputSource::Mouse(MouseButton::Left)
        );
        assert_eq!(InputSource::axis(2), InputSource::Axis(2));
    }

    #[test]
    fn test_default_jump_sources_have_no_duplicates() {
        let sources = default_jump_sources();
        let mut seen = std::collections::HashSet::new();
        for source in &sources {
            assert!(seen.insert(*source), "Duplicate default source {:?}", source);
        }
        assert!(sources.contains(&InputSource::key(KeyCode::Space)));
    }
}
