use serde::{Deserialize, Serialize};

/// Per-cell board state. Plain value with no identity beyond its position
/// in the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Holds a mine; fixed at generation.
    pub mine: bool,
    /// Uncovered; never goes back to `false` within a game.
    pub revealed: bool,
    /// Player-placed marker; only meaningful while covered.
    pub flagged: bool,
    /// Mine count over the 8-connected neighborhood, `0..=8`. Left at 0 for
    /// mine cells, which never display a count.
    pub adjacent: u8,
}

impl Cell {
    /// Neither revealed nor flagged, so reveal propagation may enter it.
    pub const fn is_hidden(self) -> bool {
        !self.revealed && !self.flagged
    }

    /// Safe cell with no mined neighbors; revealing it expands the region.
    pub const fn is_blank(self) -> bool {
        !self.mine && self.adjacent == 0
    }
}
