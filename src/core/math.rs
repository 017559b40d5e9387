// Timer math shared by the jump countdowns

/// Residue below which a countdown is considered elapsed
///
/// Repeatedly subtracting `0.1` from `0.2` in `f32` does not land on zero
/// exactly, so anything smaller than this is snapped to zero.
pub const TIMER_EPSILON: f32 = 1e-6;

/// Decrement a countdown by `dt`, clamping at zero
pub fn tick_down(remaining: f32, dt: f32) -> f32 {
    let next = remaining - dt;
    if next <= TIMER_EPSILON {
        0.0
    } else {
        next
    }
}

/// Sanitize a tick delta: non-finite or negative deltas advance nothing
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        0.0
    }
}

/// A countdown timer in seconds
///
/// A timer is running while its remaining time is strictly above zero.
/// Arming a timer during a tick leaves it untouched by that tick's
/// `advance`, so it starts counting down on the following tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Countdown {
    remaining: f32,
    armed_this_tick: bool,
}

impl Countdown {
    /// Start (or restart) the countdown from `duration`
    pub fn arm(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
        self.armed_this_tick = true;
    }

    /// Stop the countdown immediately
    pub fn clear(&mut self) {
        self.remaining = 0.0;
        self.armed_this_tick = false;
    }

    /// Age the countdown by one tick
    ///
    /// Returns true if this call made a running timer elapse.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.armed_this_tick {
            self.armed_this_tick = false;
            return false;
        }
        let was_running = self.is_running();
        self.remaining = tick_down(self.remaining, dt);
        was_running && !self.is_running()
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}
