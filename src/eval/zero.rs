use super::Evaluator;
use crate::board::PackedBoard;

/// The trivial evaluator: always 0. Useful as a baseline in tests and for exercising the
/// search machinery without heuristic noise.
#[derive(Clone, Copy, Debug, Default)]
pub struct Zero;

impl Evaluator for Zero {
    fn evaluate(&self, _board: PackedBoard) -> f32 {
        0.0
    }

    fn name(&self) -> &'static str {
        "zero"
    }
}
