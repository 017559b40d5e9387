// Input manager - folds raw window events into per-tick snapshots

use super::action::InputSource;
use super::signal::{InputSignal, TickInputs};
use std::collections::{HashMap, HashSet};
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Collects raw input events between ticks and produces `TickInputs`
///
/// A source that is pressed and released again before the tick is sampled
/// still reads as held for that one tick, so quick taps are never lost.
/// OS key-repeat events are ignored.
#[derive(Debug, Default)]
pub struct InputManager {
    /// Latest reported value of every source
    levels: HashMap<InputSource, InputSignal>,

    /// Digital sources that went down at some point during the current tick
    pressed_this_tick: HashSet<InputSource>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            if event.repeat {
                return;
            }
            let pressed = event.state == ElementState::Pressed;
            self.set_digital(InputSource::key(key_code), pressed);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        self.set_digital(
            InputSource::mouse(button),
            state == ElementState::Pressed,
        );
    }

    /// Report a digital source's level
    pub fn set_digital(&mut self, source: InputSource, pressed: bool) {
        if pressed && !self.is_held(source) {
            self.pressed_this_tick.insert(source);
        }
        self.levels.insert(source, InputSignal::Digital(pressed));
    }

    /// Report an analog source's value
    pub fn set_analog(&mut self, source: InputSource, value: f32) {
        self.levels.insert(source, InputSignal::Analog(value));
    }

    /// Whether a digital source is currently down
    pub fn is_held(&self, source: InputSource) -> bool {
        matches!(self.levels.get(&source), Some(InputSignal::Digital(true)))
    }

    /// Snapshot of all sources for the tick about to run
    pub fn snapshot(&self) -> TickInputs {
        let mut inputs = TickInputs::new();
        for (source, signal) in &self.levels {
            inputs.set(*source, *signal);
        }
        for source in &self.pressed_this_tick {
            inputs.set(*source, true);
        }
        inputs
    }

    /// Finish the current tick; call once after the snapshot was consumed
    pub fn end_tick(&mut self) {
        self.pressed_this_tick.clear();
    }

    /// Forget every source (e.g. on focus loss)
    pub fn reset(&mut self) {
        self.levels.clear();
        self.pressed_this_tick.clear();
    }
}
