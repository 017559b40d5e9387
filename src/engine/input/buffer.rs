// Single-slot press buffer for early inputs

use super::action::Action;
use crate::core::math::Countdown;

/// A press held for later consumption
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferedPress {
    pub action: Action,
    /// Tick on which the press was observed
    pub tick: u64,
    window: Countdown,
}

impl BufferedPress {
    /// Seconds left before the press expires
    pub fn remaining(&self) -> f32 {
        self.window.remaining()
    }

    pub fn is_live(&self) -> bool {
        self.window.is_running()
    }
}

/// Holds at most one press for a configured window
///
/// A newer press replaces the held one and restarts the window; this is a
/// slot, not a queue.
#[derive(Debug, Clone, Default)]
pub struct PressBuffer {
    slot: Option<BufferedPress>,
}

impl PressBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold a press for `window` seconds
    ///
    /// Returns the press it replaced, if any. A zero window holds nothing.
    pub fn push(&mut self, action: Action, tick: u64, window: f32) -> Option<BufferedPress> {
        let replaced = self.slot.take();
        let mut countdown = Countdown::default();
        countdown.arm(window);
        if countdown.is_running() {
            self.slot = Some(BufferedPress {
                action,
                tick,
                window: countdown,
            });
        }
        replaced
    }

    /// The held press, if it is still inside its window
    pub fn peek(&self) -> Option<&BufferedPress> {
        self.slot.as_ref().filter(|press| press.is_live())
    }

    pub fn has(&self, action: Action) -> bool {
        self.peek().is_some_and(|press| press.action == action)
    }

    /// Age the held press by one tick
    ///
    /// Returns the press if it expired on this call.
    pub fn update(&mut self, dt: f32) -> Option<BufferedPress> {
        let press = self.slot.as_mut()?;
        if press.window.advance(dt) {
            self.slot.take()
        } else {
            None
        }
    }

    /// Drop whatever is held
    pub fn clear(&mut self) -> Option<BufferedPress> {
        self.slot.take()
    }

    pub fn is_empty(&self) -> bool {
        self.peek().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buffer = PressBuffer::new();
        assert!(buffer.is_empty());
        assert!(!buffer.has(Action::Jump));
    }

    #[test]
    fn test_push_and_clear() {
        let mut buffer = PressBuffer::new();
        assert!(buffer.push(Action::Jump, 3, 0.1).is_none());
        assert!(buffer.has(Action::Jump));

        let press = buffer.clear().unwrap();
        assert_eq!(press.tick, 3);
        assert!(buffer.is_empty());
        assert!(buffer.clear().is_none());
    }

    #[test]
    fn test_newer_press_overwrites() {
        let mut buffer = PressBuffer::new();
        buffer.push(Action::Jump, 1, 0.3);
        buffer.update(0.1);

        let replaced = buffer.push(Action::Jump, 2, 0.3).unwrap();
        assert_eq!(replaced.tick, 1);

        let held = buffer.peek().unwrap();
        assert_eq!(held.tick, 2);
        approx::assert_relative_eq!(held.remaining(), 0.3);
    }

    #[test]
    fn test_press_survives_its_own_tick() {
        let mut buffer = PressBuffer::new();
        buffer.push(Action::Jump, 0, 0.1);

        // Ageing on the tick the press arrived leaves it alone
        assert!(buffer.update(0.1).is_none());
        assert!(buffer.has(Action::Jump));

        let expired = buffer.update(0.1).unwrap();
        assert_eq!(expired.tick, 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_zero_window_holds_nothing() {
        let mut buffer = PressBuffer::new();
        buffer.push(Action::Jump, 0, 0.0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_update_empty_buffer() {
        let mut buffer = PressBuffer::new();
        assert!(buffer.update(0.1).is_none());
    }

    #[test]
    fn test_clear() {
        let mut buffer = PressBuffer::new();
        buffer.push(Action::Jump, 0, 1.0);
        assert!(buffer.clear().is_some());
        assert!(buffer.is_empty());
    }
}
