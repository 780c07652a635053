//! Error types for the grid adapter boundary.

use std::error::Error;
use std::fmt;

use crate::id::NodeId;

/// Errors from [`TileGrid::deposit`](crate::grid::TileGrid::deposit).
///
/// The engine does not retry a failed deposit: it logs the loss and moves
/// on to the next node. A dropped deposit degrades accuracy, not safety.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepositError {
    /// The node ID does not exist in this grid.
    UnknownNode {
        /// The ID that failed to resolve.
        node: NodeId,
    },
}

impl fmt::Display for DepositError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode { node } => write!(f, "unknown grid node {node}"),
        }
    }
}

impl Error for DepositError {}
