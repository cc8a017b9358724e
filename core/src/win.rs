use crate::*;

/// Flag-based win rule: the game is won once the flagged set is exactly the
/// mine set, with no extra flags anywhere. Revealing every safe cell does
/// not count as a win on its own.
pub fn is_won(board: &Board, mines: CellCount) -> bool {
    let flagged = board.iter().filter(|cell| cell.flagged).count();
    let correct = board.iter().filter(|cell| cell.flagged && cell.mine).count();
    flagged == usize::from(mines) && correct == usize::from(mines)
}
