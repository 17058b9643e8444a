//! The possible-new-cell set produced by a shift: up to four trailing-edge cells, one per
//! row or column, where the sentinel `(-1, -1)` means that line did not move.

/// Sentinel for "this line did not move, so no new card can land here."
pub const NO_CELL: (i8, i8) = (-1, -1);

/// One candidate cell per line of the shift, in the line's fixed order (ascending row index
/// for Left/Right, ascending column index for Up/Down).
pub type PlacementCells = [(i8, i8); 4];

/// Returns the non-sentinel cells in `cells`, preserving order.
pub fn non_sentinel(cells: &PlacementCells) -> impl Iterator<Item = (u8, u8)> + '_ {
    cells
        .iter()
        .filter(|&&c| c != NO_CELL)
        .map(|&(x, y)| (x as u8, y as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_sentinel_filters_and_converts() {
        let cells: PlacementCells = [(3, 0), NO_CELL, NO_CELL, (3, 3)];
        let out: Vec<(u8, u8)> = non_sentinel(&cells).collect();
        assert_eq!(out, vec![(3, 0), (3, 3)]);
    }
}
