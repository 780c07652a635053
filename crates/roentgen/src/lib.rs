//! Roentgen: server-authoritative radiation propagation for 2D tile worlds.
//!
//! Producers emit pulses; a dedicated background worker drains them once
//! per tick, rasterizes each pulse's reach with integer circle and line
//! algorithms, attenuates strength through tile layers, and commits
//! decaying exposure onto grid nodes.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the Roentgen sub-crates. For most users, adding `roentgen` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use roentgen::prelude::*;
//!
//! // A 9x9 open map, processed synchronously for the example; a real
//! // deployment starts RadiationSimulation and submits pulses instead.
//! let grid: Arc<MapGrid> = Arc::new(MapGrid::open(9, 9));
//! let mut processor = PulseProcessor::new(
//!     Arc::clone(&grid) as Arc<dyn TileGrid + Send + Sync>,
//!     0.0,
//! );
//!
//! let strength = (75.0 * std::f64::consts::PI) as f32;
//! let report = processor.process(&Pulse::new(
//!     WorldPoint::new(4, 4, 0),
//!     strength,
//!     SourceId(1),
//! ));
//!
//! assert_eq!(report.radius, 1);
//! assert_eq!(report.boundary_points, 4);
//! let now = std::time::SystemTime::now();
//! assert!(grid.radiation_level(4, 4, now).unwrap() > 0.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `roentgen-core` | IDs, points, pulses, layers, the grid trait |
//! | [`trace`] | `roentgen-trace` | Circle boundary and attenuated ray tracing |
//! | [`grid`] | `roentgen-grid` | In-memory tile map and node decay state |
//! | [`engine`] | `roentgen-engine` | Tick loop, lifecycle, pulse submission |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the grid adapter trait (`roentgen-core`).
pub use roentgen_core as types;

/// Geometry kernel: circle boundary generation and attenuated ray
/// tracing (`roentgen-trace`).
pub use roentgen_trace as trace;

/// In-memory tile map and radiation node state (`roentgen-grid`).
pub use roentgen_grid as grid;

/// Propagation engine and lifecycle control (`roentgen-engine`).
pub use roentgen_engine as engine;

/// Common imports for typical Roentgen usage.
///
/// ```rust
/// use roentgen::prelude::*;
/// ```
pub mod prelude {
    pub use roentgen_core::{
        CellPoint, DepositError, Layer, LayerStack, NodeId, Pulse, SourceId, TileGrid, WorldPoint,
    };
    pub use roentgen_engine::{ConfigError, EngineConfig, PulseProcessor, RadiationSimulation};
    pub use roentgen_grid::{DecayConfig, MapGrid, RadiationNode};
    pub use roentgen_trace::{circle_boundary, trace_attenuated, LineWalk, MAX_RADIUS};
}
