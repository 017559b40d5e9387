// Action binding: a gated edge source for one named action

use super::action::{Action, InputSource};
use super::edge::{Edge, EdgeDetector};
use super::signal::TickInputs;
use log::debug;

/// Enable/disable capability driven by whoever owns an object's activation
pub trait Lifecycle {
    /// Start delivering input
    fn enable(&mut self);

    /// Stop delivering input, effective immediately
    fn disable(&mut self);

    fn is_enabled(&self) -> bool;
}

/// Binds one action to a set of physical sources and gates its edges
///
/// While disabled, `poll` returns `Edge::None` no matter what the sources do.
/// Edges that happen while disabled are dropped, not queued: re-enabling
/// resynchronizes the previous sample on the next poll.
#[derive(Debug, Clone)]
pub struct ActionBinding {
    action: Action,
    sources: Vec<InputSource>,
    detector: EdgeDetector,
    enabled: bool,
    /// Action level seen by the last poll
    was_active: bool,
    /// Set by `enable()`; the next poll adopts the current level silently
    resync_pending: bool,
}

impl ActionBinding {
    /// Create a disabled binding for `action`
    pub fn new(action: Action, sources: impl IntoIterator<Item = InputSource>) -> Self {
        let mut binding = Self {
            action,
            sources: Vec::new(),
            detector: EdgeDetector::default(),
            enabled: false,
            was_active: false,
            resync_pending: false,
        };
        for source in sources {
            binding.bind(source);
        }
        binding
    }

    /// Use a custom edge detector (e.g. a different analog threshold)
    pub fn with_detector(mut self, detector: EdgeDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn sources(&self) -> &[InputSource] {
        &self.sources
    }

    pub fn detector(&self) -> &EdgeDetector {
        &self.detector
    }

    /// Add a source; duplicates are ignored
    pub fn bind(&mut self, source: InputSource) {
        if !self.sources.contains(&source) {
            self.sources.push(source);
        }
    }

    /// Remove a source, returning whether it was bound
    pub fn unbind(&mut self, source: InputSource) -> bool {
        let before = self.sources.len();
        self.sources.retain(|s| *s != source);
        self.sources.len() != before
    }

    /// Whether any bound source is held in this snapshot
    pub fn level(&self, inputs: &TickInputs) -> bool {
        self.sources
            .iter()
            .any(|source| self.detector.is_active(inputs.signal(*source)))
    }

    /// Sample the sources for this tick and return the action's edge
    pub fn poll(&mut self, inputs: &TickInputs) -> Edge {
        let is_active = self.level(inputs);
        let was_active = std::mem::replace(&mut self.was_active, is_active);

        if !self.enabled {
            return Edge::None;
        }

        if self.resync_pending {
            self.resync_pending = false;
            debug!(
                "{}: resynchronized on enable (active = {})",
                self.action, is_active
            );
            return Edge::None;
        }

        Edge::between(was_active, is_active)
    }
}

impl Lifecycle for ActionBinding {
    fn enable(&mut self) {
        if !self.enabled {
            self.enabled = true;
            self.resync_pending = true;
            debug!("{}: enabled", self.action);
        }
    }

    fn disable(&mut self) {
        if self.enabled {
            self.enabled = false;
            self.resync_pending = false;
            debug!("{}: disabled", self.action);
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::InputSignal;
    use winit::keyboard::KeyCode;

    fn space() -> InputSource {
        InputSource::key(KeyCode::Space)
    }

    fn held(pressed: bool) -> TickInputs {
        TickInputs::new().with(space(), pressed)
    }

    fn enabled_binding() -> ActionBinding {
        let mut binding = ActionBinding::new(Action::Jump, [space()]);
        binding.enable();
        binding.poll(&held(false));
        binding
    }

    #[test]
    fn test_new_binding_is_disabled() {
        let mut binding = ActionBinding::new(Action::Jump, [space()]);
        assert!(!binding.is_enabled());
        assert_eq!(binding.poll(&held(true)), Edge::None);
    }

    #[test]
    fn test_press_and_release_edges() {
        let mut binding = enabled_binding();
        assert_eq!(binding.poll(&held(true)), Edge::Pressed);
        assert_eq!(binding.poll(&held(true)), Edge::None);
        assert_eq!(binding.poll(&held(false)), Edge::Released);
        assert_eq!(binding.poll(&held(false)), Edge::None);
    }

    #[test]
    fn test_disabled_drops_edges() {
        let mut binding = enabled_binding();
        binding.disable();
        assert_eq!(binding.poll(&held(true)), Edge::None);
        assert_eq!(binding.poll(&held(false)), Edge::None);
        assert_eq!(binding.poll(&held(true)), Edge::None);
    }

    #[test]
    fn test_disable_enable_without_change_is_silent() {
        let mut binding = enabled_binding();
        assert_eq!(binding.poll(&held(true)), Edge::Pressed);

        binding.disable();
        binding.enable();
        assert_eq!(binding.poll(&held(true)), Edge::None);
        assert_eq!(binding.poll(&held(true)), Edge::None);
    }

    #[test]
    fn test_press_during_disable_is_not_replayed() {
        let mut binding = enabled_binding();
        binding.disable();
        binding.poll(&held(true));

        binding.enable();
        // Still held after re-enabling: no stale press fires
        assert_eq!(binding.poll(&held(true)), Edge::None);
        assert_eq!(binding.poll(&held(false)), Edge::Released);
        assert_eq!(binding.poll(&held(true)), Edge::Pressed);
    }

    #[test]
    fn test_enable_resyncs_even_without_polls_while_disabled() {
        let mut binding = enabled_binding();
        binding.disable();
        binding.enable();
        // Level changed between disable and the first poll: resync swallows it
        assert_eq!(binding.poll(&held(true)), Edge::None);
        assert_eq!(binding.poll(&held(false)), Edge::Released);
    }

    #[test]
    fn test_enable_twice_keeps_edges_flowing() {
        let mut binding = enabled_binding();
        binding.enable();
        assert_eq!(binding.poll(&held(true)), Edge::Pressed);
    }

    #[test]
    fn test_multiple_sources_are_ored() {
        let w = InputSource::key(KeyCode::KeyW);
        let mut binding = ActionBinding::new(Action::Jump, [space(), w]);
        binding.enable();
        binding.poll(&TickInputs::new());

        let both = TickInputs::new().with(space(), true).with(w, true);
        assert_eq!(binding.poll(&both), Edge::Pressed);

        // Releasing one source while the other is held is not a release
        let only_w = TickInputs::new().with(w, true);
        assert_eq!(binding.poll(&only_w), Edge::None);

        assert_eq!(binding.poll(&TickInputs::new()), Edge::Released);
    }

    #[test]
    fn test_analog_source_uses_threshold() {
        let trigger = InputSource::axis(5);
        let mut binding = ActionBinding::new(Action::Jump, [trigger]);
        binding.enable();
        binding.poll(&TickInputs::new());

        let half = TickInputs::new().with(trigger, InputSignal::Analog(0.3));
        assert_eq!(binding.poll(&half), Edge::None);
        let full = TickInputs::new().with(trigger, InputSignal::Analog(0.9));
        assert_eq!(binding.poll(&full), Edge::Pressed);
    }

    #[test]
    fn test_bind_and_unbind() {
        let mut binding = ActionBinding::new(Action::Jump, [space(), space()]);
        assert_eq!(binding.sources().len(), 1);

        assert!(binding.unbind(space()));
        assert!(!binding.unbind(space()));
        assert!(binding.sources().is_empty());
    }
}
