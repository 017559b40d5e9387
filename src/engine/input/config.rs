// Binding configuration: which physical sources drive which action

use super::action::{default_jump_sources, Action, InputSource};
use super::binding::ActionBinding;
use super::edge::{EdgeDetector, DEFAULT_ACTIVATION_THRESHOLD};
use crate::core::ConfigError;
use std::collections::HashMap;

/// Maps actions to input sources for one controlled entity
///
/// Plain owned data; `binding_for` turns an entry into a live `ActionBinding`.
#[derive(Debug, Clone)]
pub struct BindingConfig {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,

    /// Reverse mapping, kept in bind order
    action_to_sources: HashMap<Action, Vec<InputSource>>,

    /// Analog activation threshold used by bindings built from this config
    activation_threshold: f32,
}

impl Default for BindingConfig {
    fn default() -> Self {
        let mut config = Self::empty();
        config.reset_to_defaults();
        config
    }
}

impl BindingConfig {
    /// A configuration with no bindings
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_sources: HashMap::new(),
            activation_threshold: DEFAULT_ACTIVATION_THRESHOLD,
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::empty();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Set the analog activation threshold, rejecting values outside `(0, 1]`
    pub fn with_activation_threshold(mut self, threshold: f32) -> Result<Self, ConfigError> {
        EdgeDetector::new(threshold)?;
        self.activation_threshold = threshold;
        Ok(self)
    }

    /// Bind an input source to an action, replacing any previous owner of the source
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.unbind_source(source);
        self.bindings.insert(source, action);
        self.action_to_sources
            .entry(action)
            .or_default()
            .push(source);
    }

    /// Unbind an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(action) = self.bindings.remove(&source) {
            if let Some(sources) = self.action_to_sources.get_mut(&action) {
                sources.retain(|s| *s != source);
                if sources.is_empty() {
                    self.action_to_sources.remove(&action);
                }
            }
        }
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Get all input sources bound to an action
    pub fn get_sources(&self, action: Action) -> Vec<InputSource> {
        self.action_to_sources
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.action_to_sources.contains_key(&action)
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.action_to_sources.clear();
    }

    /// Restore the shipped bindings
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for source in default_jump_sources() {
            self.bind(source, Action::Jump);
        }
    }

    /// Build a (disabled) binding for `action`
    pub fn binding_for(&self, action: Action) -> Result<ActionBinding, ConfigError> {
        let detector = EdgeDetector::new(self.activation_threshold)?;
        Ok(ActionBinding::new(action, self.get_sources(action)).with_detector(detector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::Lifecycle;
    use winit::event::MouseButton;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_defaults_bind_jump() {
        let config = BindingConfig::default();
        assert!(config.has_binding(Action::Jump));
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::Space)),
            Some(Action::Jump)
        );
    }

    #[test]
    fn test_bind_and_unbind_source() {
        let mut config = BindingConfig::empty();
        let source = InputSource::mouse(MouseButton::Left);
        config.bind(source, Action::Jump);
        assert_eq!(config.get_sources(Action::Jump), vec![source]);

        config.unbind_source(source);
        assert_eq!(config.get_action(source), None);
        assert!(!config.has_binding(Action::Jump));
    }

    #[test]
    fn test_rebinding_same_source_does_not_duplicate() {
        let mut config = BindingConfig::empty();
        let source = InputSource::key(KeyCode::KeyK);
        config.bind(source, Action::Jump);
        config.bind(source, Action::Jump);
        assert_eq!(config.get_sources(Action::Jump).len(), 1);
    }

    #[test]
    fn test_clear_and_reset() {
        let mut config = BindingConfig::default();
        config.clear();
        assert!(!config.has_binding(Action::Jump));

        config.reset_to_defaults();
        assert_eq!(
            config.get_sources(Action::Jump),
            crate::engine::input::action::default_jump_sources()
        );
    }

    #[test]
    fn test_from_bindings() {
        let config = BindingConfig::from_bindings(vec![
            (InputSource::key(KeyCode::KeyJ), Action::Jump),
            (InputSource::axis(2), Action::Jump),
        ]);
        assert_eq!(config.get_sources(Action::Jump).len(), 2);
    }

    #[test]
    fn test_binding_for_builds_disabled_binding() {
        let config = BindingConfig::default();
        let binding = config.binding_for(Action::Jump).unwrap();
        assert!(!binding.is_enabled());
        assert_eq!(binding.action(), Action::Jump);
        assert_eq!(binding.sources(), config.get_sources(Action::Jump).as_slice());
    }

    #[test]
    fn test_activation_threshold_is_validated() {
        assert!(BindingConfig::default()
            .with_activation_threshold(0.0)
            .is_err());

        let config = BindingConfig::default()
            .with_activation_threshold(0.8)
            .unwrap();
        let binding = config.binding_for(Action::Jump).unwrap();
        assert_eq!(binding.detector().activation_threshold(), 0.8);
    }
}
