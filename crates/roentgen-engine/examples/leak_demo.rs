//! A small leaking-reactor scenario: one strong pulse per second into a
//! shielded room, printing the exposure gradient as it builds and decays.
//!
//! Run with `RUST_LOG=debug` to see per-pulse processing stats.

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use roentgen_core::{Layer, SourceId, TileGrid, WorldPoint};
use roentgen_engine::{EngineConfig, RadiationSimulation};
use roentgen_grid::MapGrid;

fn main() {
    env_logger::init();

    // A 21x21 room with a shielding wall splitting it down the middle.
    let mut map = MapGrid::open(21, 21);
    for y in 0..21 {
        if y == 10 {
            continue; // doorway
        }
        map.set_layers(10, y, [(Layer::Floor, 1.0), (Layer::Wall, 0.1)]);
    }
    let grid: Arc<MapGrid> = Arc::new(map);

    let sim = RadiationSimulation::new(
        Arc::clone(&grid) as Arc<dyn TileGrid + Send + Sync>,
        EngineConfig::default(),
    )
    .expect("valid config");
    sim.start();

    let reactor = WorldPoint::new(4, 10, 0);
    let strength = (8.0 * 75.0 * std::f64::consts::PI) as f32;

    for second in 0..5 {
        sim.request_pulse(reactor, strength, SourceId(1));
        std::thread::sleep(Duration::from_secs(1));

        let now = SystemTime::now();
        let at = |x: i32, y: i32| grid.radiation_level(x, y, now).unwrap_or(0.0);
        println!(
            "t+{second}s  reactor={:8.2}  doorway={:8.2}  behind wall={:8.2}  far corner={:8.2}",
            at(4, 10),
            at(10, 10),
            at(14, 10),
            at(20, 0),
        );
    }

    sim.stop();
}
