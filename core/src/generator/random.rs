use ndarray::Array2;

use super::*;

/// Seeded generator placing mines by uniform position draws, redrawing on
/// collision until the requested count is reached. Fine for the board sizes
/// and densities this engine targets; a rank-based single pass would bound
/// the redraws on near-full boards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        use rand::prelude::*;

        config.validate()?;

        let (rows, cols) = config.size;
        let mut mine_mask: Array2<bool> = Array2::default(nd(config.size));
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;

        while placed < config.mines {
            let pos: Pos = (rng.random_range(0..rows), rng.random_range(0..cols));
            let slot = &mut mine_mask[nd(pos)];
            if !*slot {
                *slot = true;
                placed += 1;
            }
        }

        log::debug!(
            "generated {}x{} board with {} mines (seed {})",
            rows,
            cols,
            placed,
            self.seed
        );
        Ok(Board::from_mine_mask(mine_mask))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_requested_mines() {
        let config = GameConfig::new((9, 9), 10).unwrap();
        let board = RandomBoardGenerator::new(7).generate(config).unwrap();
        assert_eq!(board.size(), (9, 9));
        assert_eq!(board.mine_count(), 10);
    }

    #[test]
    fn adjacency_invariant_holds_for_every_safe_cell() {
        let config = GameConfig::new((8, 8), 12).unwrap();
        let board = RandomBoardGenerator::new(42).generate(config).unwrap();
        let size = board.size();
        for row in 0..size.0 {
            for col in 0..size.1 {
                let pos = (row, col);
                if board[pos].mine {
                    continue;
                }
                let expected = neighbors(pos, size).filter(|&p| board[p].mine).count();
                assert_eq!(usize::from(board[pos].adjacent), expected, "at {:?}", pos);
            }
        }
    }

    #[test]
    fn same_seed_deals_the_same_board() {
        let config = GameConfig::new((16, 16), 40).unwrap();
        let first = RandomBoardGenerator::new(99).generate(config).unwrap();
        let second = RandomBoardGenerator::new(99).generate(config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn fresh_boards_start_fully_covered() {
        let config = GameConfig::new((5, 5), 5).unwrap();
        let board = RandomBoardGenerator::new(3).generate(config).unwrap();
        assert!(board.iter().all(|cell| !cell.revealed && !cell.flagged));
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let full = GameConfig::new_unchecked((4, 4), 16);
        assert_eq!(
            RandomBoardGenerator::new(1).generate(full),
            Err(GameError::InvalidMineCount)
        );
        let flat = GameConfig::new_unchecked((0, 4), 1);
        assert_eq!(
            RandomBoardGenerator::new(1).generate(flat),
            Err(GameError::InvalidDimensions)
        );
    }
}
