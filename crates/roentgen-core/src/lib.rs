//! Core types and traits for the Roentgen radiation simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace: typed
//! IDs, integer grid points, the [`Pulse`] value type, tile layers, and
//! the [`TileGrid`] adapter trait the propagation engine deposits through.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod id;
pub mod layer;
pub mod point;
pub mod pulse;

pub use error::DepositError;
pub use grid::{LayerStack, TileGrid};
pub use id::{NodeId, SourceId};
pub use layer::Layer;
pub use point::{CellPoint, WorldPoint};
pub use pulse::Pulse;
