use anyhow::Result;
use log::info;
use rusted_jump::engine::game_loop::GameLoop;
use rusted_jump::engine::input::{Action, BindingConfig, InputManager, Lifecycle};
use rusted_jump::engine::physics::{JumperShape, PhysicsWorld, RigidBodyHandle};
use rusted_jump::game::jump::{BodyImpulseSink, Decision, JumpConfig, JumpController};
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

/// Jumper capsule size
const JUMPER: JumperShape = JumperShape {
    width: 1.0,
    height: 2.0,
};

/// Spawn point for the jumper's center
const SPAWN: (f32, f32) = (0.0, 1.0);

/// Demo scene: one jumper standing on a ground slab
struct Scene {
    world: PhysicsWorld,
    jumper: RigidBodyHandle,
}

impl Scene {
    fn new() -> Self {
        let mut world = PhysicsWorld::new();
        world.spawn_ground(0.0, -0.5, 40.0, 1.0);
        let jumper = world.spawn_jumper(JUMPER, SPAWN.0, SPAWN.1);

        Self { world, jumper }
    }

    fn is_grounded(&self) -> bool {
        self.world.is_grounded(self.jumper, JUMPER.half_height())
    }

    /// Put the jumper back at the spawn point at rest
    fn respawn(&mut self) {
        self.world.teleport(self.jumper, SPAWN.0, SPAWN.1);
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Jump...");

    let binding = BindingConfig::default().binding_for(Action::Jump)?;
    let mut controller = JumpController::attach(0, JumpConfig::default(), binding)?;
    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();
    let mut scene = Scene::new();
    scene.world.set_timestep(game_loop.fixed_timestep());

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rusted Jump")
        .with_inner_size(winit::dpi::LogicalSize::new(640, 360))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created. Space/W/Up to jump, P to pause, R to respawn");
    controller.enable();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::Focused(focused) => {
                    if focused {
                        controller.enable();
                    } else {
                        controller.disable();
                        input.reset();
                    }
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    handle_hotkeys(&event, &mut game_loop, &mut controller, &mut scene);
                    input.process_keyboard_event(&event);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input.process_mouse_button(state, button);
                }
                _ => {}
            },
            Event::AboutToWait => {
                let dt = game_loop.fixed_timestep();
                for _ in 0..game_loop.begin_frame() {
                    let tick = game_loop.next_tick();
                    let grounded = scene.is_grounded();
                    let snapshot = input.snapshot();

                    let outcome = {
                        let mut sink = BodyImpulseSink::new(&mut scene.world, scene.jumper);
                        controller.tick(&snapshot, grounded, dt, tick, &mut sink)
                    };
                    if let Decision::Fired(command) = outcome.decision {
                        info!("Tick {}: jump ({} units/s)", tick, command.magnitude);
                    }

                    input.end_tick();
                    scene.world.step();
                }
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Demo-only keys that act on the loop rather than the jump action
fn handle_hotkeys(
    event: &KeyEvent,
    game_loop: &mut GameLoop,
    controller: &mut JumpController,
    scene: &mut Scene,
) {
    if event.state != ElementState::Pressed || event.repeat {
        return;
    }

    match event.physical_key {
        PhysicalKey::Code(KeyCode::KeyP) => game_loop.toggle_pause(),
        PhysicalKey::Code(KeyCode::KeyR) => {
            scene.respawn();
            controller.respawn();
            info!("Respawned at {:?}", SPAWN);
        }
        _ => {}
    }
}
