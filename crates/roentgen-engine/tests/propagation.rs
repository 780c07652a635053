//! End-to-end propagation through the running engine.
//!
//! These tests exercise the full path — inbox, tick worker, geometry
//! kernel, grid deposits — rather than the processor in isolation.

use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

use roentgen_core::{Layer, SourceId, TileGrid, WorldPoint};
use roentgen_engine::{EngineConfig, RadiationSimulation};
use roentgen_grid::MapGrid;
use roentgen_test_utils::FixtureGrid;

fn fast_config() -> EngineConfig {
    EngineConfig {
        tick_delay_ms: 1,
        ..EngineConfig::default()
    }
}

/// Poll until `done` returns true or the deadline passes.
fn wait_for(what: &str, done: impl Fn() -> bool) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !done() {
        if Instant::now() > deadline {
            panic!("timed out waiting for {what}");
        }
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn pulse_flows_from_inbox_to_grid() {
    let grid = Arc::new(FixtureGrid::open(9, 9));
    let sim = RadiationSimulation::new(Arc::clone(&grid) as _, fast_config()).unwrap();
    sim.start();

    let strength = (75.0 * std::f64::consts::PI) as f32;
    sim.request_pulse(WorldPoint::new(4, 4, 0), strength, SourceId(11));

    wait_for("pulse to commit", || grid.deposit_count() >= 5);
    sim.stop();

    assert!((grid.deposited_at(4, 4) - strength).abs() < 1e-3);
    for record in grid.deposits() {
        assert_eq!(record.source, SourceId(11));
    }
}

#[test]
fn concurrent_producers_lose_and_duplicate_nothing() {
    let grid = Arc::new(FixtureGrid::open(5, 5));
    let sim = Arc::new(RadiationSimulation::new(Arc::clone(&grid) as _, fast_config()).unwrap());
    sim.start();

    // Strength 1.0 keeps the radius at 0: exactly one deposit per pulse.
    let producers = 4;
    let per_producer = 25;
    let handles: Vec<_> = (0..producers)
        .map(|p| {
            let sim = Arc::clone(&sim);
            std::thread::spawn(move || {
                for _ in 0..per_producer {
                    sim.request_pulse(WorldPoint::new(2, 2, 0), 1.0, SourceId(p));
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let expected = (producers * per_producer) as usize;
    wait_for("all pulses to commit", || grid.deposit_count() >= expected);
    sim.stop();

    assert_eq!(grid.deposit_count(), expected);
    assert!((grid.deposited_at(2, 2) - expected as f32).abs() < 1e-3);
}

#[test]
fn opaque_tile_shields_everything_behind_it() {
    let mut map = MapGrid::open(10, 1);
    map.set_layers(4, 0, [(Layer::Floor, 1.0), (Layer::Wall, 0.01)]);
    let grid = Arc::new(map);

    let sim = RadiationSimulation::new(
        Arc::clone(&grid) as Arc<dyn TileGrid + Send + Sync>,
        fast_config(),
    )
    .unwrap();
    sim.start();

    // Strong enough to reach the far end of the row.
    let strength = (9.0 * 75.0 * std::f64::consts::PI) as f32;
    sim.request_pulse(WorldPoint::new(0, 0, 0), strength, SourceId(1));

    let now = SystemTime::now();
    wait_for("deposits behind the wall", || {
        grid.radiation_level(9, 0, now).unwrap() > 0.0
    });
    sim.stop();

    let now = SystemTime::now();
    let before_wall = grid.radiation_level(3, 0, now).unwrap();
    assert!(before_wall > 0.0);
    // Every ray reaching cells past x=4 crossed the wall: levels there
    // carry at least the 0.01 factor.
    for x in 5..10 {
        let behind = grid.radiation_level(x, 0, now).unwrap();
        assert!(
            behind <= before_wall * 0.05,
            "cell {x} got {behind}, before-wall level was {before_wall}"
        );
    }
}

#[test]
fn oversized_pulse_is_clamped_to_the_radius_cap() {
    let grid = Arc::new(FixtureGrid::open(201, 201));
    let sim = RadiationSimulation::new(Arc::clone(&grid) as _, fast_config()).unwrap();
    sim.start();

    // Closed-form radius would be 1000; the cap is 50.
    let strength = (1000.0 * 75.0 * std::f64::consts::PI) as f32;
    sim.request_pulse(WorldPoint::new(100, 100, 0), strength, SourceId(2));

    wait_for("clamped pulse to commit", || grid.deposit_count() > 0);
    sim.stop();

    let center = roentgen_core::CellPoint::new(100, 100);
    for record in grid.deposits() {
        let idx = record.node.0 as i32;
        let cell = roentgen_core::CellPoint::new(idx % 201, idx / 201);
        assert!(
            center.distance_to(cell) <= 51.0,
            "deposit at {cell} outside the clamped radius"
        );
    }
}
