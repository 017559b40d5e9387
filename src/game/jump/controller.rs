// Jump controller: one entity's binding, state machine and context

use super::command::{PhysicsSink, TickOutcome};
use super::config::JumpConfig;
use super::context::JumpContext;
use super::machine::{JumpStateMachine, TickInput};
use super::state::JumpState;
use crate::core::ConfigError;
use crate::engine::input::{ActionBinding, Lifecycle, TickInputs};
use log::info;

/// Unique identifier for a controlled entity
pub type EntityId = u32;

/// Drives jumping for one controlled entity
///
/// Attach creates the binding disabled; the owner's activation lifecycle
/// turns it on and off through `Lifecycle`.
#[derive(Debug)]
pub struct JumpController {
    id: EntityId,
    binding: ActionBinding,
    machine: JumpStateMachine,
    context: JumpContext,
}

impl JumpController {
    /// Attach a controller to entity `id`
    pub fn attach(
        id: EntityId,
        config: JumpConfig,
        mut binding: ActionBinding,
    ) -> Result<Self, ConfigError> {
        let machine = JumpStateMachine::new(config)?;
        let context = machine.new_context();
        binding.disable();

        info!(
            "Entity {}: jump controller attached ({} sources)",
            id,
            binding.sources().len()
        );

        Ok(Self {
            id,
            binding,
            machine,
            context,
        })
    }

    /// Run one tick: poll input, advance the machine, hand any impulse to `sink`
    pub fn tick(
        &mut self,
        inputs: &TickInputs,
        grounded: bool,
        dt: f32,
        tick: u64,
        sink: &mut dyn PhysicsSink,
    ) -> TickOutcome {
        let edge = self.binding.poll(inputs);
        let outcome = self.machine.transition(
            &mut self.context,
            TickInput {
                tick,
                dt,
                edge,
                grounded,
            },
        );

        if let Some(command) = outcome.impulse() {
            sink.apply_impulse(command);
        }

        outcome
    }

    /// Reset jump state for a respawned entity
    pub fn respawn(&mut self) {
        self.machine.reset(&mut self.context);
        info!("Entity {}: jump state reset on respawn", self.id);
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn state(&self) -> JumpState {
        self.context.state()
    }

    pub fn context(&self) -> &JumpContext {
        &self.context
    }

    pub fn binding(&self) -> &ActionBinding {
        &self.binding
    }

    pub fn config(&self) -> &JumpConfig {
        self.machine.config()
    }
}

impl Lifecycle for JumpController {
    fn enable(&mut self) {
        if !self.binding.is_enabled() {
            info!("Entity {}: jump input enabled", self.id);
        }
        self.binding.enable();
    }

    fn disable(&mut self) {
        if self.binding.is_enabled() {
            info!("Entity {}: jump input disabled", self.id);
        }
        self.binding.disable();
    }

    fn is_enabled(&self) -> bool {
        self.binding.is_enabled()
    }
}
