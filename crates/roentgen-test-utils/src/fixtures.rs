//! Reusable grid fixtures.
//!
//! [`FixtureGrid`] is a deterministic in-memory [`TileGrid`]: every
//! in-bounds cell resolves, passability defaults to fully open, and every
//! deposit is recorded for assertions. Attenuating or underfloor layers
//! can be placed on individual cells.

use std::sync::Mutex;
use std::time::SystemTime;

use roentgen_core::{
    CellPoint, DepositError, Layer, LayerStack, NodeId, SourceId, TileGrid, WorldPoint,
};
use smallvec::smallvec;

/// One recorded deposit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepositRecord {
    /// Node the deposit landed on.
    pub node: NodeId,
    /// Deposited amount.
    pub amount: f32,
    /// Commit timestamp passed by the engine.
    pub timestamp: SystemTime,
    /// Emitter attribution.
    pub source: SourceId,
}

/// Recording test grid over a `width × height` rectangle at the origin.
///
/// The vertical coordinate is ignored: the fixture models a single plane.
pub struct FixtureGrid {
    width: i32,
    height: i32,
    attenuators: Vec<(CellPoint, f32)>,
    underfloor: Vec<(CellPoint, f32)>,
    deposits: Mutex<Vec<DepositRecord>>,
}

impl FixtureGrid {
    /// An open field: every cell is a bare floor with passability 1.0.
    pub fn open(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "fixture grid must be non-empty");
        Self {
            width,
            height,
            attenuators: Vec::new(),
            underfloor: Vec::new(),
            deposits: Mutex::new(Vec::new()),
        }
    }

    /// Stack an attenuating wall layer with the given passability onto a cell.
    pub fn with_attenuator(mut self, x: i32, y: i32, coefficient: f32) -> Self {
        self.attenuators.push((CellPoint::new(x, y), coefficient));
        self
    }

    /// Stack an underfloor layer onto a cell. The trace kernel must
    /// ignore it regardless of the coefficient.
    pub fn with_underfloor(mut self, x: i32, y: i32, coefficient: f32) -> Self {
        self.underfloor.push((CellPoint::new(x, y), coefficient));
        self
    }

    /// The node ID of an in-bounds cell.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn node_at(&self, x: i32, y: i32) -> NodeId {
        self.index(x, y).expect("cell out of fixture bounds")
    }

    /// Snapshot of every deposit recorded so far, in commit order.
    pub fn deposits(&self) -> Vec<DepositRecord> {
        self.deposits.lock().unwrap().clone()
    }

    /// Total amount deposited across all nodes.
    pub fn total_deposited(&self) -> f32 {
        self.deposits.lock().unwrap().iter().map(|d| d.amount).sum()
    }

    /// Total amount deposited onto one cell.
    pub fn deposited_at(&self, x: i32, y: i32) -> f32 {
        let node = self.node_at(x, y);
        self.deposits
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.node == node)
            .map(|d| d.amount)
            .sum()
    }

    /// Number of deposit calls observed.
    pub fn deposit_count(&self) -> usize {
        self.deposits.lock().unwrap().len()
    }

    /// Forget all recorded deposits.
    pub fn clear_deposits(&self) {
        self.deposits.lock().unwrap().clear();
    }

    fn index(&self, x: i32, y: i32) -> Option<NodeId> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some(NodeId((y * self.width + x) as u32))
    }
}

impl TileGrid for FixtureGrid {
    fn resolve(&self, point: WorldPoint) -> Option<NodeId> {
        self.index(point.x, point.y)
    }

    fn layer_passability(&self, point: WorldPoint) -> LayerStack {
        let cell = point.xy();
        let mut stack: LayerStack = smallvec![(Layer::Floor, 1.0)];
        for &(at, coefficient) in &self.attenuators {
            if at == cell {
                stack.push((Layer::Wall, coefficient));
            }
        }
        for &(at, coefficient) in &self.underfloor {
            if at == cell {
                stack.push((Layer::Underfloor, coefficient));
            }
        }
        stack
    }

    fn deposit(
        &self,
        node: NodeId,
        amount: f32,
        timestamp: SystemTime,
        source: SourceId,
    ) -> Result<(), DepositError> {
        if node.0 as usize >= (self.width * self.height) as usize {
            return Err(DepositError::UnknownNode { node });
        }
        self.deposits.lock().unwrap().push(DepositRecord {
            node,
            amount,
            timestamp,
            source,
        });
        Ok(())
    }
}
