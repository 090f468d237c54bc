//! TetraTris - falling blocks in four dimensions
//!
//! Headless demo: plays one game with random key presses, paced by the
//! gravity cadence when `demo.realtime` is set, and logs its progress.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use tetra4d::config::AppConfig;
use tetra4d::systems::SimulationSystem;
use tetra4d_core::Phase;
use tetra4d_input::InputMapper;

/// Keys the demo presses at random between ticks
const DEMO_KEYS: [KeyCode; 7] = [
    KeyCode::KeyZ,
    KeyCode::KeyX,
    KeyCode::KeyC,
    KeyCode::KeyV,
    KeyCode::ArrowLeft,
    KeyCode::ArrowUp,
    KeyCode::Enter,
];

/// Press a key and feed the mapped action to the simulation
fn press(sim: &mut SimulationSystem, key: KeyCode) -> bool {
    match InputMapper::map_keyboard(key, ElementState::Pressed, sim.is_playing()) {
        Some(action) => !sim.handle_action(action).exit,
        None => true,
    }
}

fn main() {
    let config = AppConfig::load_or_default();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting TetraTris demo");

    let mut sim = SimulationSystem::new(&config);
    let mut keys = StdRng::seed_from_u64(config.game.seed.wrapping_add(1));

    // Menu pointer starts on Play
    press(&mut sim, KeyCode::Enter);

    let mut ticks = 0;
    while sim.game().phase() == Phase::Playing && ticks < config.demo.max_ticks {
        if config.demo.realtime {
            std::thread::sleep(sim.tick_interval());
        }

        if keys.gen_bool(0.3) {
            let key = DEMO_KEYS[keys.gen_range(0..DEMO_KEYS.len())];
            if !press(&mut sim, key) {
                break;
            }
        }

        let result = sim.tick();
        ticks += 1;
        if result.redraw {
            log::debug!(
                "Tick {}: {} points, {} edges",
                ticks,
                sim.wireframe().point_count(),
                sim.wireframe().edge_count()
            );
        }
    }

    log::info!(
        "Demo finished after {} ticks ({:?}), score {}, {} settled cells",
        ticks,
        sim.game().phase(),
        sim.game().score(),
        sim.game().board().settled().len()
    );
}
