//! Toroidal multi-occupancy grid.
//!
//! # Data layout
//!
//! Two arrays kept in lock-step:
//!
//! ```text
//! cells[cell]      -> agents registered in that cell, in arrival order
//! locations[agent] -> the cell the agent is stored at (CellId::INVALID if unplaced)
//! ```
//!
//! `locations` is the agent's stored position; `cells` is its registration.
//! Every mutation goes through [`SpatialGrid::place`] or
//! [`SpatialGrid::move_agent`], which update both together.  Any coordinate
//! is accepted and wrapped, so placement and queries have no range errors.

use triage_core::{AgentId, CellId, GridPos};

use crate::{GridError, GridResult};

pub struct SpatialGrid {
    width:     u32,
    height:    u32,
    cells:     Vec<Vec<AgentId>>,
    locations: Vec<CellId>,
}

impl SpatialGrid {
    /// Create an empty `width × height` torus.
    pub fn new(width: u32, height: u32) -> GridResult<Self> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        // Every cell needs a `CellId` below the `INVALID` sentinel.
        if width as u64 * height as u64 >= CellId::INVALID.0 as u64 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let cell_count = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            cells: vec![Vec::new(); cell_count],
            locations: Vec::new(),
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    // ── Coordinates ───────────────────────────────────────────────────────

    /// Wrap `pos` onto the torus.
    #[inline]
    pub fn wrap(&self, pos: GridPos) -> GridPos {
        pos.wrap(self.width, self.height)
    }

    /// Row-major cell index of `pos` (wrapped first).
    #[inline]
    pub fn cell_id(&self, pos: GridPos) -> CellId {
        let p = self.wrap(pos);
        CellId(p.y as u32 * self.width + p.x as u32)
    }

    /// Coordinates of `cell`.
    #[inline]
    pub fn cell_pos(&self, cell: CellId) -> GridPos {
        GridPos::new((cell.0 % self.width) as i32, (cell.0 / self.width) as i32)
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// Register `agent` at `pos`.  Placing an already-placed agent relocates
    /// it.  Returns the wrapped position.
    pub fn place(&mut self, agent: AgentId, pos: GridPos) -> GridPos {
        if self.locations.len() <= agent.index() {
            self.locations.resize(agent.index() + 1, CellId::INVALID);
        }
        let old = self.locations[agent.index()];
        if old != CellId::INVALID {
            self.cells[old.index()].retain(|&a| a != agent);
        }
        let cell = self.cell_id(pos);
        self.cells[cell.index()].push(agent);
        self.locations[agent.index()] = cell;
        self.cell_pos(cell)
    }

    /// Move a placed agent to `pos`: deregister from its current cell,
    /// register at the new one, and update its stored position.
    ///
    /// Fails with an invariant violation if the agent is unplaced or its
    /// stored cell does not list it.  The grid is left untouched in that case.
    pub fn move_agent(&mut self, agent: AgentId, pos: GridPos) -> GridResult<GridPos> {
        let old = self.registered_cell(agent)?;
        let slot = self.cells[old.index()]
            .iter()
            .position(|&a| a == agent)
            .ok_or(GridError::Desync { agent, cell: old })?;
        self.cells[old.index()].remove(slot);

        let cell = self.cell_id(pos);
        self.cells[cell.index()].push(agent);
        self.locations[agent.index()] = cell;
        Ok(self.cell_pos(cell))
    }

    /// Check that `agent` is placed and registered in its stored cell.
    pub fn verify(&self, agent: AgentId) -> GridResult<()> {
        let cell = self.registered_cell(agent)?;
        if self.cells[cell.index()].contains(&agent) {
            Ok(())
        } else {
            Err(GridError::Desync { agent, cell })
        }
    }

    fn registered_cell(&self, agent: AgentId) -> GridResult<CellId> {
        match self.locations.get(agent.index()) {
            Some(&cell) if cell != CellId::INVALID => Ok(cell),
            _ => Err(GridError::NotPlaced(agent)),
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Stored position of `agent`, or `None` if it was never placed.
    pub fn position(&self, agent: AgentId) -> Option<GridPos> {
        self.registered_cell(agent).ok().map(|c| self.cell_pos(c))
    }

    /// Agents registered at `pos` (wrapped), in arrival order.
    #[inline]
    pub fn agents_at(&self, pos: GridPos) -> &[AgentId] {
        &self.cells[self.cell_id(pos).index()]
    }

    /// All cells within Chebyshev distance `radius` of `pos`, wrapped
    /// toroidally, each listed once, scanned row by row.  The centre cell is listed
    /// only when `include_center` is set.
    ///
    /// A radius that spans the whole axis simply covers every column (or
    /// row), so large radii cost no more than a full-board scan.
    pub fn neighborhood(&self, pos: GridPos, radius: u32, include_center: bool) -> Vec<GridPos> {
        let center = self.wrap(pos);
        let xs = axis_offsets(center.x, radius, self.width);
        let ys = axis_offsets(center.y, radius, self.height);

        let mut out = Vec::with_capacity(xs.len() * ys.len());
        for &y in &ys {
            for &x in &xs {
                let cell = GridPos::new(x, y);
                if cell == center && !include_center {
                    continue;
                }
                out.push(cell);
            }
        }
        out
    }

    /// Agents occupying any of `cells`, each listed once, in cell order then
    /// arrival order.
    pub fn contents_of(&self, cells: &[GridPos]) -> Vec<AgentId> {
        let mut seen = vec![false; self.cell_count()];
        let mut out = Vec::new();
        for &pos in cells {
            let cell = self.cell_id(pos);
            if std::mem::replace(&mut seen[cell.index()], true) {
                continue;
            }
            out.extend_from_slice(&self.cells[cell.index()]);
        }
        out
    }
}

/// Wrapped coordinates along one axis within `radius` of `center`.
///
/// When the window is at least as wide as the axis every coordinate is
/// returned once; otherwise the `2r + 1` offsets are distinct modulo `len`.
fn axis_offsets(center: i32, radius: u32, len: u32) -> Vec<i32> {
    if 2 * radius as u64 + 1 >= len as u64 {
        (0..len as i32).collect()
    } else {
        let start = center as i64 - radius as i64;
        (0..=2 * radius as i64)
            .map(|k| (start + k).rem_euclid(len as i64) as i32)
            .collect()
    }
}
