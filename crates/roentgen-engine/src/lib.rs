//! Radiation propagation engine.
//!
//! Owns the background simulation loop: a dedicated worker thread drains
//! the pulse inbox once per tick, computes each pulse's affected area via
//! the geometry kernel in `roentgen-trace`, and commits accumulated
//! radiation to the grid through the `TileGrid` adapter. Propagation is
//! expensive and latency-insensitive, so it never runs on the caller's
//! thread.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod processor;
pub mod sim;
mod worker;

pub use config::{ConfigError, EngineConfig};
pub use processor::{PulseProcessor, PulseReport};
pub use sim::RadiationSimulation;
