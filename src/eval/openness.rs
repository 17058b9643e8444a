use super::{edges_touched, orthogonal_neighbors, Evaluator};
use crate::board::PackedBoard;

/// Returns true iff the neighbor at `neighbor` (or the absence of one, i.e. a wall) blocks
/// movement along that axis for a cell of value `v`: a wall always blocks; a neighbor blocks
/// iff it is strictly larger (index >= 3 and greater than `v`) and therefore cannot merge
/// with `v` by any rule in 4.B.
pub(crate) fn blocks(neighbor: Option<u8>, v: u8) -> bool {
    match neighbor {
        None => true,
        Some(nv) => nv >= 3 && nv > v,
    }
}

/// Openness-style scoring shared by `Openness` and `OpennessMatthew`: walks every cell,
/// scoring it per the weights supplied, and returns the board total.
pub(crate) struct OpennessWeights {
    pub empty: f32,
    pub mergeable_neighbor: f32,
    pub trapped_axis: f32,
    pub next_up_neighbor: f32,
}

pub(crate) fn score_with_weights(board: PackedBoard, weights: &OpennessWeights) -> f32 {
    let mut total = 0.0f32;

    for y in 0..4u8 {
        for x in 0..4u8 {
            let v = board.get(x, y);
            if v == 0 {
                total += weights.empty;
                continue;
            }

            let mut left = None;
            let mut right = None;
            let mut up = None;
            let mut down = None;
            for (nx, ny) in orthogonal_neighbors(x, y) {
                let nv = board.get(nx, ny);
                if nx < x {
                    left = Some(nv);
                } else if nx > x {
                    right = Some(nv);
                } else if ny < y {
                    up = Some(nv);
                } else if ny > y {
                    down = Some(nv);
                }
                if PackedBoard::can_cards_merge(nv, v) {
                    total += weights.mergeable_neighbor;
                }
            }

            if blocks(left, v) && blocks(right, v) {
                total -= weights.trapped_axis;
            }
            if blocks(up, v) && blocks(down, v) {
                total -= weights.trapped_axis;
            }

            if v >= 3 {
                let has_next_up = orthogonal_neighbors(x, y).any(|(nx, ny)| board.get(nx, ny) == v + 1);
                if has_next_up {
                    total += weights.next_up_neighbor;
                }
            }
        }
    }

    total
}

/// The base openness heuristic (4.E): rewards empty cells and mergeable neighbors, penalizes
/// cells trapped on an axis, and rewards cells adjacent to the next rung of the ladder.
#[derive(Clone, Copy, Debug, Default)]
pub struct Openness;

const WEIGHTS: OpennessWeights = OpennessWeights {
    empty: 2.0,
    mergeable_neighbor: 1.0,
    trapped_axis: 1.0,
    next_up_neighbor: 1.0,
};

impl Evaluator for Openness {
    fn evaluate(&self, board: PackedBoard) -> f32 {
        score_with_weights(board, &WEIGHTS)
    }

    fn name(&self) -> &'static str {
        "openness"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::packed_board_from_logical;

    #[test]
    fn all_empty_board_scores_two_per_cell() {
        assert_eq!(Openness.evaluate(PackedBoard::EMPTY), 2.0 * 16.0);
    }

    #[test]
    fn mergeable_neighbor_scores_positively() {
        // 1 and 2 adjacent: each sees one mergeable neighbor, plus three empty neighbors each.
        let board = packed_board_from_logical([1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        let score = Openness.evaluate(board);
        // Cell (0,0)=1: neighbors (1,0)=2 [mergeable, +1], (0,1)=0 [not mergeable].
        // Cell (1,0)=2: neighbors (0,0)=1 [mergeable, +1], (2,0)=0, (1,1)=0.
        // Remaining 14 empty cells each contribute +2.
        assert_eq!(score, 1.0 + 1.0 + 14.0 * 2.0);
    }

    #[test]
    fn wall_on_both_sides_traps_the_axis() {
        // A lone row of three distinct high, non-mergeable cards: the middle cell is boxed
        // in horizontally by larger non-mergeable neighbors.
        let board = packed_board_from_logical([
            24, 6, 48, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ])
        .unwrap();
        // cell (1,0) = 6 (index 4): left neighbor 24 (index 6, >=3 and >4) blocks,
        // right neighbor 48 (index 7, >=3 and >4) blocks => horizontally trapped (-1).
        let score = Openness.evaluate(board);
        assert!(score < 2.0 * 16.0, "trapped board should score below the all-empty baseline plateau");
    }

    #[test]
    fn purity_for_equal_boards() {
        let a = packed_board_from_logical([1, 2, 3, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        let b = packed_board_from_logical([1, 2, 3, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(Openness.evaluate(a), Openness.evaluate(b));
    }
}
