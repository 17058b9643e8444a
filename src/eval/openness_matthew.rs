use super::openness::{score_with_weights, OpennessWeights};
use super::{edges_touched, orthogonal_neighbors, Evaluator};
use crate::board::PackedBoard;

const WEIGHTS: OpennessWeights = OpennessWeights {
    empty: 3.0,
    mergeable_neighbor: 2.0,
    trapped_axis: 5.0,
    next_up_neighbor: 2.0,
};

/// Edge-hugging bonus added on top of [`score_with_weights`] once the board holds a card
/// beyond index 4: rewards keeping the highest few rungs of the ladder pinned to the
/// border, where they are least likely to get boxed in.
fn edge_hugging_bonus(board: PackedBoard) -> f32 {
    let m = board.max_card_index();
    if m <= 4 {
        return 0.0;
    }

    let mut bonus = 0.0f32;
    for y in 0..4u8 {
        for x in 0..4u8 {
            let v = board.get(x, y);
            if v == m {
                bonus += 3.0 * edges_touched(x, y) as f32;
            } else if v == m - 1 {
                let touches_top = orthogonal_neighbors(x, y).any(|(nx, ny)| board.get(nx, ny) == m);
                if touches_top {
                    bonus += 1.0 + edges_touched(x, y) as f32;
                }
            } else if v == m - 2 {
                let chains_to_top = orthogonal_neighbors(x, y).any(|(nx, ny)| {
                    board.get(nx, ny) == m - 1
                        && orthogonal_neighbors(nx, ny).any(|(nx2, ny2)| board.get(nx2, ny2) == m)
                });
                if chains_to_top {
                    bonus += 1.0;
                }
            }
        }
    }
    bonus
}

/// A richer openness heuristic (4.E): steeper weights than [`super::Openness`], plus an
/// edge-hugging bonus once the board holds a card beyond index 4 that rewards pinning the
/// top few rungs of the ladder to the border.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpennessMatthew;

impl Evaluator for OpennessMatthew {
    fn evaluate(&self, board: PackedBoard) -> f32 {
        score_with_weights(board, &WEIGHTS) + edge_hugging_bonus(board)
    }

    fn name(&self) -> &'static str {
        "openness-matthew"
    }
}
