//! In-memory tile map implementing the Roentgen grid adapter contract.
//!
//! [`MapGrid`] is the reference [`TileGrid`](roentgen_core::TileGrid)
//! implementation: a rectangular map of layered tiles whose per-cell
//! [`RadiationNode`] state holds a running exposure level with
//! last-update timestamp, source attribution, and half-life decay.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod map;
pub mod node;

pub use map::MapGrid;
pub use node::{DecayConfig, RadiationNode};
