// Jump state machine
//
// Each tick runs in a fixed order:
//
// 1. ground transitions, based on the state entering the tick
// 2. pick the press to handle (a live press beats a buffered one)
// 3. fire if eligible, otherwise buffer or discard
// 4. age cooldown, coyote and buffer timers
//
// Timers armed during a tick start counting down on the next one.

use super::command::{Decision, DiscardReason, ImpulseCommand, TickOutcome};
use super::config::JumpConfig;
use super::context::JumpContext;
use super::state::JumpState;
use crate::core::math::sanitize_dt;
use crate::core::ConfigError;
use crate::engine::input::{Action, Edge};
use log::{debug, info, warn};

/// Everything the machine needs to know about one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    pub tick: u64,
    /// Seconds since the previous tick
    pub dt: f32,
    /// Edge of the jump action on this tick
    pub edge: Edge,
    /// Ground contact reported by the physics side
    pub grounded: bool,
}

/// How an eligible press is spent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JumpKind {
    /// From the ground, or within coyote time
    Ground,
    /// Spends one air jump
    Air,
}

/// Decides, tick by tick, when a jump impulse fires
#[derive(Debug, Clone)]
pub struct JumpStateMachine {
    config: JumpConfig,
}

impl JumpStateMachine {
    /// Validate `config` and build a machine; nothing is built on error
    pub fn new(config: JumpConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &JumpConfig {
        &self.config
    }

    /// A fresh context for a newly created entity
    pub fn new_context(&self) -> JumpContext {
        JumpContext::new(&self.config)
    }

    /// Reset a context, e.g. on respawn
    pub fn reset(&self, ctx: &mut JumpContext) {
        *ctx = JumpContext::new(&self.config);
    }

    /// Advance `ctx` by one tick
    ///
    /// Total: every input produces an outcome, nothing here can fail.
    pub fn transition(&self, ctx: &mut JumpContext, input: TickInput) -> TickOutcome {
        let dt = sanitize_dt(input.dt);
        if !(input.dt.is_finite() && input.dt >= 0.0) {
            warn!("Tick {}: ignoring invalid dt {}", input.tick, input.dt);
        }

        self.apply_ground_contact(ctx, input.grounded);

        let mut dropped = None;
        let decision = if input.edge.is_pressed() {
            if let Some(old) = ctx.buffer.clear() {
                debug!(
                    "Tick {}: buffered press from tick {} overwritten",
                    input.tick, old.tick
                );
                dropped = Some(DiscardReason::Overwritten);
            }
            self.handle_live_press(ctx, input.tick)
        } else if ctx.buffer.has(Action::Jump) {
            match self.try_jump(ctx, input.tick) {
                Some(command) => Decision::Fired(command),
                None => Decision::Idle,
            }
        } else {
            Decision::Idle
        };

        ctx.cooldown.advance(dt);
        ctx.coyote.advance(dt);
        if let Some(expired) = ctx.buffer.update(dt) {
            debug!(
                "Tick {}: buffered press from tick {} expired unconsumed",
                input.tick, expired.tick
            );
            dropped.get_or_insert(DiscardReason::Expired);
        }

        TickOutcome {
            state: ctx.state,
            decision,
            dropped,
        }
    }

    fn apply_ground_contact(&self, ctx: &mut JumpContext, grounded: bool) {
        let before = ctx.state;
        match ctx.state {
            // Startup is a one-tick pulse
            JumpState::JumpStartup => ctx.state = JumpState::Airborne,
            JumpState::Grounded | JumpState::Cooldown if !grounded => {
                ctx.state = JumpState::Airborne;
                ctx.coyote.arm(self.config.coyote_seconds);
            }
            JumpState::Airborne if grounded => {
                ctx.air_jumps_remaining = self.config.max_air_jumps;
                ctx.coyote.arm(self.config.coyote_seconds);
                ctx.state = if ctx.cooldown.is_running() {
                    JumpState::Cooldown
                } else {
                    JumpState::Grounded
                };
            }
            JumpState::Cooldown if !ctx.cooldown.is_running() => {
                ctx.state = JumpState::Grounded;
            }
            _ => {}
        }
        if ctx.state != before {
            debug!("Jump state {} -> {}", before, ctx.state);
        }
    }

    fn handle_live_press(&self, ctx: &mut JumpContext, tick: u64) -> Decision {
        if let Some(command) = self.try_jump(ctx, tick) {
            return Decision::Fired(command);
        }

        let window = self.config.buffer_window_seconds;
        if window > 0.0 {
            ctx.buffer.push(Action::Jump, tick, window);
            debug!(
                "Tick {}: press buffered for {}s (state {})",
                tick, window, ctx.state
            );
            Decision::Buffered
        } else {
            debug!("Tick {}: press discarded, not eligible (state {})", tick, ctx.state);
            Decision::Discarded(DiscardReason::BufferDisabled)
        }
    }

    fn eligibility(&self, ctx: &JumpContext) -> Option<JumpKind> {
        if ctx.cooldown.is_running() {
            return None;
        }
        match ctx.state {
            JumpState::Grounded => Some(JumpKind::Ground),
            JumpState::Airborne if ctx.coyote.is_running() => Some(JumpKind::Ground),
            JumpState::Airborne if ctx.air_jumps_remaining > 0 => Some(JumpKind::Air),
            _ => None,
        }
    }

    /// Fire a jump if the context allows it
    fn try_jump(&self, ctx: &mut JumpContext, tick: u64) -> Option<ImpulseCommand> {
        let kind = self.eligibility(ctx)?;
        if kind == JumpKind::Air {
            ctx.air_jumps_remaining -= 1;
        }

        ctx.state = JumpState::JumpStartup;
        ctx.coyote.clear();
        ctx.cooldown.arm(self.config.cooldown_seconds);
        ctx.buffer.clear();
        ctx.last_jump_tick = Some(tick);
        ctx.impulses_fired += 1;

        info!(
            "Tick {}: {:?} jump fired (air jumps left: {})",
            tick, kind, ctx.air_jumps_remaining
        );

        Some(ImpulseCommand {
            action: Action::Jump,
            magnitude: self.config.jump_impulse_magnitude,
            tick,
        })
    }
}
