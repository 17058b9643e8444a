use super::Evaluator;
use crate::board::PackedBoard;

/// Returns the board's end-of-game score (§3).
#[derive(Clone, Copy, Debug, Default)]
pub struct TotalScore;

impl Evaluator for TotalScore {
    fn evaluate(&self, board: PackedBoard) -> f32 {
        board.total_score() as f32
    }

    fn name(&self) -> &'static str {
        "total-score"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::packed_board_from_logical;

    #[test]
    fn matches_total_score_query() {
        let board = packed_board_from_logical([3, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(TotalScore.evaluate(board), (3 + 9) as f32);
    }

    #[test]
    fn empty_board_scores_zero() {
        assert_eq!(TotalScore.evaluate(PackedBoard::EMPTY), 0.0);
    }
}
