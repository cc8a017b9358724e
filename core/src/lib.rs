#![no_std]

extern crate alloc;

use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use reveal::*;
pub use session::*;
pub use types::*;
pub use win::*;

mod cell;
mod error;
mod generator;
mod reveal;
mod session;
mod types;
mod win;

/// Board parameters handed in by the hosting UI.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Pos,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Pos, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Pos, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    /// Both dimensions must be positive and at least one cell must stay free
    /// of mines. The axis and count types are unsigned, so negative inputs
    /// cannot reach this far.
    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.size;
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::InvalidMineCount);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size.0, self.size.1)
    }
}

/// Rectangular row-major grid of [`Cell`]s.
///
/// The session treats boards as values: every accepted move produces a fresh
/// board and commits it wholesale, so any snapshot a caller holds on to stays
/// exactly as handed out. Note that a snapshot carries `mine` for every cell
/// regardless of reveal state; the renderer is trusted to only draw mines
/// once they are revealed or the game is over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Builds a board from a mine mask, computing every adjacency count.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let cells = mine_mask.map(|&mine| Cell {
            mine,
            ..Cell::default()
        });
        let mut board = Self { cells };
        board.recount_adjacent();
        board
    }

    /// Builds a board with mines at exactly `mine_coords`. Handy for
    /// predetermined layouts; random play goes through [`BoardGenerator`].
    pub fn from_mine_coords(size: Pos, mine_coords: &[Pos]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(nd(size));
        for &pos in mine_coords {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[nd(pos)] = true;
        }
        Ok(Self::from_mine_mask(mine_mask))
    }

    fn recount_adjacent(&mut self) {
        let size = self.size();
        for row in 0..size.0 {
            for col in 0..size.1 {
                let pos = (row, col);
                if self[pos].mine {
                    continue;
                }
                let count = neighbors(pos, size).filter(|&p| self[p].mine).count();
                self.cells[nd(pos)].adjacent = count.try_into().unwrap();
            }
        }
    }

    pub fn size(&self) -> Pos {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.mine)
            .count()
            .try_into()
            .unwrap()
    }

    pub fn flagged_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.flagged)
            .count()
            .try_into()
            .unwrap()
    }

    pub fn validate_pos(&self, pos: Pos) -> Result<Pos> {
        let size = self.size();
        if pos.0 < size.0 && pos.1 < size.1 {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Copy with every cell uncovered and flags left in place. Used when a
    /// mine goes off and the whole field is shown.
    pub fn reveal_all(&self) -> Self {
        let mut next = self.clone();
        for cell in next.cells.iter_mut() {
            cell.revealed = true;
        }
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

impl Index<Pos> for Board {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.cells[nd(pos)]
    }
}

impl IndexMut<Pos> for Board {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        &mut self.cells[nd(pos)]
    }
}

/// What a single tap did to the session. The caller decides which
/// notification, if any, to surface for it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TapOutcome {
    NoChange,
    Flagged,
    Revealed,
    HitMine,
    Won,
}

impl TapOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_dimensions() {
        assert_eq!(
            GameConfig::new((0, 5), 1),
            Err(GameError::InvalidDimensions)
        );
        assert_eq!(
            GameConfig::new((5, 0), 1),
            Err(GameError::InvalidDimensions)
        );
    }

    #[test]
    fn config_rejects_mine_count_at_or_above_cell_count() {
        assert_eq!(GameConfig::new((3, 3), 9), Err(GameError::InvalidMineCount));
        assert!(GameConfig::new((3, 3), 8).is_ok());
        assert!(GameConfig::new((3, 3), 0).is_ok());
    }

    #[test]
    fn mine_coords_outside_the_board_are_rejected() {
        assert_eq!(
            Board::from_mine_coords((2, 2), &[(2, 0)]).unwrap_err(),
            GameError::OutOfBounds
        );
    }

    #[test]
    fn adjacency_counts_match_the_mine_layout() {
        let board = Board::from_mine_coords((3, 3), &[(0, 0)]).unwrap();
        assert_eq!(board[(0, 1)].adjacent, 1);
        assert_eq!(board[(1, 0)].adjacent, 1);
        assert_eq!(board[(1, 1)].adjacent, 1);
        assert_eq!(board[(2, 2)].adjacent, 0);
        assert_eq!(board.mine_count(), 1);
    }

    #[test]
    fn reveal_all_uncovers_every_cell_and_keeps_flags() {
        let mut board = Board::from_mine_coords((2, 2), &[(0, 0)]).unwrap();
        board[(0, 1)].flagged = true;
        let shown = board.reveal_all();
        assert!(shown.iter().all(|cell| cell.revealed));
        assert!(shown[(0, 1)].flagged);
        assert!(!board[(0, 0)].revealed);
    }
}
