//! Fixed-timestep tick driver
//!
//! Wall-clock frames are converted into a whole number of fixed ticks so the
//! jump state machine always advances in equal steps, and every tick gets a
//! monotonically increasing index.

use crate::core::error::require_positive;
use crate::core::ConfigError;
use std::time::{Duration, Instant};

/// Default tick rate (60 ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Maximum number of ticks per frame to prevent spiral of death
const MAX_TICKS_PER_FRAME: u32 = 5;

/// Game loop timing state
pub struct GameLoop {
    /// Length of one tick
    timestep: Duration,

    /// Accumulated time not yet spent on ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Whether ticking is paused
    paused: bool,

    /// Index handed out by the next `next_tick` call
    next_tick: u64,
}

impl GameLoop {
    /// Create a loop ticking at `FIXED_TIMESTEP`
    pub fn new() -> Self {
        Self::from_duration(Duration::from_secs_f32(FIXED_TIMESTEP))
    }

    /// Create a loop with a custom tick length in seconds
    pub fn with_timestep(seconds: f32) -> Result<Self, ConfigError> {
        let seconds = require_positive("timestep", seconds)?;
        Ok(Self::from_duration(Duration::from_secs_f32(seconds)))
    }

    fn from_duration(timestep: Duration) -> Self {
        Self {
            timestep,
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            next_tick: 0,
        }
    }

    /// Begin a new frame, returns the number of fixed ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Feed `frame_time` of elapsed time, returns the number of ticks to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        // If paused, don't accumulate time for ticks
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= self.timestep && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.timestep;
            ticks += 1;
        }

        // Drop the backlog we refused to run instead of carrying it forward
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= self.timestep {
            log::warn!(
                "Frame took {:?}, dropping {:?} of simulation time",
                frame_time,
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        ticks
    }

    /// Claim the index for the tick about to run
    pub fn next_tick(&mut self) -> u64 {
        let tick = self.next_tick;
        self.next_tick += 1;
        tick
    }

    /// Number of ticks handed out so far
    pub fn tick_count(&self) -> u64 {
        self.next_tick
    }

    /// Length of one tick in seconds
    pub fn fixed_timestep(&self) -> f32 {
        self.timestep.as_secs_f32()
    }

    /// Check if ticking is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause ticking
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    /// Resume ticking
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent a tick burst
            self.accumulator = Duration::ZERO;
            self.last_frame_time = Instant::now();
            log::info!("Game resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenth_second_loop() -> GameLoop {
        GameLoop::with_timestep(0.1).unwrap()
    }

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new();
        assert_eq!(game_loop.tick_count(), 0);
        assert!(!game_loop.is_paused());
        assert!((game_loop.fixed_timestep() - 1.0 / 60.0).abs() < 0.0001);
    }

    #[test]
    fn test_invalid_timestep_rejected() {
        assert!(GameLoop::with_timestep(0.0).is_err());
        assert!(GameLoop::with_timestep(f32::NAN).is_err());
    }

    #[test]
    fn test_advance_accumulates_partial_frames() {
        let mut game_loop = tenth_second_loop();
        assert_eq!(game_loop.advance(Duration::from_millis(60)), 0);
        assert_eq!(game_loop.advance(Duration::from_millis(60)), 1);
        assert_eq!(game_loop.advance(Duration::from_millis(250)), 2);
    }

    #[test]
    fn test_max_ticks_per_frame_limit() {
        let mut game_loop = tenth_second_loop();
        assert_eq!(game_loop.advance(Duration::from_secs(3)), MAX_TICKS_PER_FRAME);
        // Backlog was dropped
        assert_eq!(game_loop.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_paused_no_ticks() {
        let mut game_loop = tenth_second_loop();
        game_loop.pause();
        assert_eq!(game_loop.advance(Duration::from_millis(500)), 0);

        game_loop.resume();
        assert_eq!(game_loop.advance(Duration::from_millis(150)), 1);
    }

    #[test]
    fn test_toggle_pause() {
        let mut game_loop = GameLoop::new();
        game_loop.toggle_pause();
        assert!(game_loop.is_paused());
        game_loop.toggle_pause();
        assert!(!game_loop.is_paused());
    }

    #[test]
    fn test_tick_indices_increase() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.next_tick(), 0);
        assert_eq!(game_loop.next_tick(), 1);
        assert_eq!(game_loop.tick_count(), 2);
    }
}
