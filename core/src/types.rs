/// Linear board axis, used for row/column indices and board dimensions.
pub type Coord = u8;

/// Area-scale counter, used for cell and mine counts.
pub type CellCount = u16;

/// `(row, col)` position on a board, row-major like the grid itself.
pub type Pos = (Coord, Coord);

/// Total cell count of a `rows x cols` board. Cannot overflow: `255 * 255`
/// still fits a [`CellCount`].
pub const fn area(rows: Coord, cols: Coord) -> CellCount {
    rows as CellCount * cols as CellCount
}

/// Row-major `ndarray` index for a position.
pub const fn nd((row, col): Pos) -> [usize; 2] {
    [row as usize, col as usize]
}

const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the up-to-8 orthogonal and diagonal neighbors of `center`,
/// clipped at the grid edges.
pub fn neighbors(center: Pos, bounds: Pos) -> impl Iterator<Item = Pos> {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(move |&delta| offset_within(center, delta, bounds))
}

fn offset_within((row, col): Pos, (dr, dc): (i8, i8), (rows, cols): Pos) -> Option<Pos> {
    let row = row.checked_add_signed(dr)?;
    let col = col.checked_add_signed(dc)?;
    (row < rows && col < cols).then_some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_edge_and_center_neighbor_counts() {
        assert_eq!(neighbors((0, 0), (3, 3)).count(), 3);
        assert_eq!(neighbors((0, 1), (3, 3)).count(), 5);
        assert_eq!(neighbors((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let all: Vec<_> = neighbors((0, 0), (2, 2)).collect();
        assert_eq!(all, [(0, 1), (1, 0), (1, 1)]);
    }
}
