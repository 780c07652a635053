//! Rectangular tile map with per-cell layer stacks and radiation nodes.

use std::sync::Mutex;
use std::time::SystemTime;

use roentgen_core::{
    CellPoint, DepositError, Layer, LayerStack, NodeId, SourceId, TileGrid, WorldPoint,
};
use smallvec::smallvec;

use crate::node::{DecayConfig, RadiationNode};

struct Cell {
    layers: LayerStack,
    node: Mutex<RadiationNode>,
}

/// In-memory `width × height` tile map anchored at the origin.
///
/// Every in-bounds cell has a node; out-of-bounds coordinates resolve to
/// `None` and are skipped by the trace kernel. The map models a single
/// vertical plane, so the `z` component of resolved points is ignored —
/// a multi-deck world routes each deck to its own `MapGrid`.
///
/// Deposits are serialized per cell with a mutex, satisfying the adapter
/// contract: the tick worker may deposit while other threads read levels.
pub struct MapGrid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    decay: DecayConfig,
}

impl MapGrid {
    /// An open map: every cell is a bare floor with passability 1.0.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn open(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "MapGrid must be non-empty");
        let created_at = SystemTime::now();
        let count = (width as usize) * (height as usize);
        let cells = (0..count)
            .map(|_| Cell {
                layers: smallvec![(Layer::Floor, 1.0)],
                node: Mutex::new(RadiationNode::new(created_at)),
            })
            .collect();
        Self {
            width: width as i32,
            height: height as i32,
            cells,
            decay: DecayConfig::default(),
        }
    }

    /// Replace the decay configuration.
    pub fn with_decay(mut self, decay: DecayConfig) -> Self {
        self.decay = decay;
        self
    }

    /// Replace the layer stack at a cell. Intended for map construction,
    /// before the grid is shared with the engine.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds, or if any coefficient is
    /// outside `(0, 1]`.
    pub fn set_layers(&mut self, x: i32, y: i32, layers: impl IntoIterator<Item = (Layer, f32)>) {
        let idx = self
            .index(x, y)
            .unwrap_or_else(|| panic!("cell ({x}, {y}) out of map bounds"));
        let stack: LayerStack = layers.into_iter().collect();
        for &(layer, coefficient) in &stack {
            assert!(
                coefficient > 0.0 && coefficient <= 1.0,
                "passability for {layer} at ({x}, {y}) must be in (0, 1], got {coefficient}"
            );
        }
        self.cells[idx].layers = stack;
    }

    /// Snapshot of a cell's radiation node, or `None` out of bounds.
    pub fn node(&self, x: i32, y: i32) -> Option<RadiationNode> {
        let idx = self.index(x, y)?;
        Some(*self.cells[idx].node.lock().unwrap())
    }

    /// The decayed radiation level of a cell as of `now`.
    pub fn radiation_level(&self, x: i32, y: i32, now: SystemTime) -> Option<f32> {
        let idx = self.index(x, y)?;
        let node = self.cells[idx].node.lock().unwrap();
        Some(node.level_at(now, self.decay))
    }

    /// Map width in cells.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Map height in cells.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The cell a node ID refers to.
    pub fn cell_of(&self, node: NodeId) -> Option<CellPoint> {
        let idx = node.0 as i32;
        if idx as usize >= self.cells.len() {
            return None;
        }
        Some(CellPoint::new(idx % self.width, idx / self.width))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }
}

impl TileGrid for MapGrid {
    fn resolve(&self, point: WorldPoint) -> Option<NodeId> {
        self.index(point.x, point.y).map(|idx| NodeId(idx as u32))
    }

    fn layer_passability(&self, point: WorldPoint) -> LayerStack {
        match self.index(point.x, point.y) {
            Some(idx) => self.cells[idx].layers.clone(),
            None => LayerStack::new(),
        }
    }

    fn deposit(
        &self,
        node: NodeId,
        amount: f32,
        timestamp: SystemTime,
        source: SourceId,
    ) -> Result<(), DepositError> {
        let cell = self
            .cells
            .get(node.0 as usize)
            .ok_or(DepositError::UnknownNode { node })?;
        cell.node
            .lock()
            .unwrap()
            .deposit(amount, timestamp, source, self.decay);
        Ok(())
    }
}
