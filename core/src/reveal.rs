use alloc::collections::{BTreeSet, VecDeque};

use crate::*;

/// Reveals `pos` on a copy of `board` and returns the copy.
///
/// An already-revealed or flagged target comes back as an unchanged copy. A
/// blank target floods outward through its connected zero-adjacency region
/// and the numbered cells bordering it; flagged cells are skipped and stay
/// covered. A mine target is uncovered as-is, without expansion; ending the
/// game on it is the caller's decision.
pub fn reveal(board: &Board, pos: Pos) -> Result<Board> {
    let pos = board.validate_pos(pos)?;
    let mut next = board.clone();

    let target = next[pos];
    if target.revealed || target.flagged {
        return Ok(next);
    }

    next[pos].revealed = true;
    if !target.is_blank() {
        return Ok(next);
    }

    // Explicit worklist; large empty regions must not eat call stack.
    let size = next.size();
    let mut visited = BTreeSet::from([pos]);
    let mut to_visit: VecDeque<_> = neighbors(pos, size)
        .filter(|&p| next[p].is_hidden())
        .collect();
    log::trace!("flood fill from {:?}, seed neighbors: {:?}", pos, to_visit);

    while let Some(visit) = to_visit.pop_front() {
        if !visited.insert(visit) {
            continue;
        }

        let cell = next[visit];
        if cell.revealed || cell.flagged {
            continue;
        }

        next[visit].revealed = true;

        if cell.is_blank() {
            to_visit.extend(
                neighbors(visit, size)
                    .filter(|&p| next[p].is_hidden())
                    .filter(|p| !visited.contains(p)),
            );
        }
    }

    Ok(next)
}
