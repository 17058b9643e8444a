//! The facade (4.G) that front-ends call instead of touching the search internals directly.

use crate::board::{Direction, PackedBoard};
use crate::deck::DeckCounter;
use crate::hint::NextCardHint;
use crate::search::{search_best_move, SearchConfig};

/// Wraps a [`SearchConfig`] behind the two external entry points a caller actually needs:
/// "what's the best move" and, for diagnostics, "what's the best move, and how much work did
/// it take".
pub struct Bot {
    config: SearchConfig,
}

impl Bot {
    pub fn new(config: SearchConfig) -> Bot {
        Bot { config }
    }

    /// Returns the best direction to shift, or `None` if the game is over from this state.
    pub fn get_next_move(&self, board: PackedBoard, deck: DeckCounter, hint: NextCardHint) -> Option<Direction> {
        search_best_move(&self.config, board, deck, hint).map(|outcome| outcome.direction)
    }

    /// As [`Bot::get_next_move`], but also reports how many leaf evaluations the search
    /// performed, for diagnostic logging.
    pub fn get_next_move_with_evaluations(
        &self,
        board: PackedBoard,
        deck: DeckCounter,
        hint: NextCardHint,
    ) -> Option<(Direction, u64)> {
        search_best_move(&self.config, board, deck, hint).map(|outcome| (outcome.direction, outcome.evaluations))
    }

    /// "depth / horizon / evaluator name", for diagnostic logging.
    pub fn description(&self) -> String {
        self.config.description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::packed_board_from_logical;
    use crate::eval::EmptySpaces;

    #[test]
    fn reports_no_move_on_a_locked_board() {
        let board = packed_board_from_logical([
            1, 3, 1, 3, 3, 1, 3, 1, 1, 3, 1, 3, 3, 1, 3, 1,
        ])
        .unwrap();
        let bot = Bot::new(SearchConfig::new(2, 1, Box::new(EmptySpaces)).unwrap());
        assert!(bot.get_next_move(board, DeckCounter::FULL, NextCardHint::One).is_none());
    }

    #[test]
    fn picks_a_legal_move_when_one_exists() {
        let board = packed_board_from_logical([1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        let bot = Bot::new(SearchConfig::new(2, 1, Box::new(EmptySpaces)).unwrap());
        let (direction, evaluations) = bot
            .get_next_move_with_evaluations(board, DeckCounter::FULL, NextCardHint::One)
            .unwrap();
        let (_, _, moved) = board.shift(direction);
        assert!(moved);
        assert!(evaluations > 0);
    }

    #[test]
    fn description_reports_depth_horizon_and_evaluator() {
        let bot = Bot::new(SearchConfig::new(4, 2, Box::new(EmptySpaces)).unwrap());
        let description = bot.description();
        assert!(description.contains("depth=4"));
        assert!(description.contains("horizon=2"));
        assert!(description.contains("empty-spaces"));
    }
}
