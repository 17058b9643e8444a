//! Expectimax search (4.F): alternating MAX plies (the player picks a direction) and CHANCE
//! plies (the game places the incoming card), averaged over the deck distribution up to a
//! card-count horizon and approximated deterministically beyond it.

use std::thread;

use crate::board::{non_sentinel, Direction, PackedBoard, PlacementCells, ALL_DIRECTIONS};
use crate::deck::DeckCounter;
use crate::eval::Evaluator;
use crate::hint::NextCardHint;
use crate::utils::prelude::*;

/// Search parameters: how many MAX plies to look ahead (`depth`), how many of the plies
/// descended from the root still average over the deck distribution rather than falling
/// back to a deterministic approximation (`horizon`), and which heuristic scores leaves.
pub struct SearchConfig {
    depth: u8,
    horizon: u8,
    evaluator: Box<dyn Evaluator + Send + Sync>,
}

impl SearchConfig {
    /// Validates and builds a search configuration. `depth` must be at least 1; `horizon`
    /// must be in `1..=depth`.
    pub fn new(depth: u8, horizon: u8, evaluator: Box<dyn Evaluator + Send + Sync>) -> Result<SearchConfig> {
        if depth < 1 {
            return Err(anyhow!("search depth must be at least 1, got {depth}"));
        }
        if horizon < 1 || horizon > depth {
            return Err(anyhow!("card-count horizon must be in 1..={depth}, got {horizon}"));
        }
        Ok(SearchConfig { depth, horizon, evaluator })
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn horizon(&self) -> u8 {
        self.horizon
    }

    pub fn evaluator(&self) -> &(dyn Evaluator + Send + Sync) {
        self.evaluator.as_ref()
    }

    /// "depth / horizon / evaluator name", for diagnostic logging.
    pub fn description(&self) -> String {
        format!("depth={} horizon={} evaluator={}", self.depth, self.horizon, self.evaluator.name())
    }
}

/// The result of a completed root search: the chosen direction, its quality, and how many
/// leaf evaluations were performed along the way.
#[derive(Clone, Copy, Debug)]
pub struct SearchOutcome {
    pub direction: Direction,
    pub quality: f32,
    pub evaluations: u64,
}

/// What is known about the card about to land, at the chance node immediately below a MAX
/// node. Only the root chance node can be `Known`/`Bonus`; every deeper chance node is
/// `Unknown` (the true identity of future cards is never known in advance).
#[derive(Clone, Copy)]
enum ChanceKind {
    Known(u8),
    Bonus,
    Unknown,
}

/// Runs the full expectimax search from `board`, with `deck` and `hint` describing what is
/// known about the upcoming card, and returns the best direction and its quality — or `None`
/// if no direction changes the board (game over).
///
/// The four root directions are split across two worker threads ({Left,Right} and
/// {Up,Down}), per 4.F/§5; deeper recursion is single-threaded.
pub fn search_best_move(
    config: &SearchConfig,
    board: PackedBoard,
    deck: DeckCounter,
    hint: NextCardHint,
) -> Option<SearchOutcome> {
    let remaining = config.depth - 1;
    let chance_kind = match hint.known_index() {
        Some(index) => ChanceKind::Known(index),
        None => ChanceKind::Bonus,
    };

    let evaluate_root_directions = |dirs: &[Direction]| -> (Option<(Direction, f32)>, u64) {
        let mut best: Option<(Direction, f32)> = None;
        let mut evaluations = 0u64;
        for &dir in dirs {
            let (after, cells, moved) = board.shift(dir);
            if !moved {
                continue;
            }
            let quality = chance_value(config, after, deck, chance_kind, &cells, remaining, 0, &mut evaluations);
            if best.is_none_or(|(_, best_quality)| quality > best_quality) {
                best = Some((dir, quality));
            }
        }
        (best, evaluations)
    };

    let ((left_right_best, left_right_evals), (up_down_best, up_down_evals)) = thread::scope(|scope| {
        let left_right = scope.spawn(|| evaluate_root_directions(&[Direction::Left, Direction::Right]));
        let up_down = evaluate_root_directions(&[Direction::Up, Direction::Down]);
        (left_right.join().expect("root search worker panicked"), up_down)
    });

    let evaluations = left_right_evals + up_down_evals;

    let mut best: Option<(Direction, f32)> = None;
    for candidate in [left_right_best, up_down_best].into_iter().flatten() {
        if best.is_none_or(|(_, best_quality)| candidate.1 > best_quality) {
            best = Some(candidate);
        }
    }

    best.map(|(direction, quality)| SearchOutcome { direction, quality, evaluations })
}

/// A CHANCE node: averages the quality of the MAX children reached by each possible card
/// placement, weighted per 4.F.
fn chance_value(
    config: &SearchConfig,
    board: PackedBoard,
    deck: DeckCounter,
    kind: ChanceKind,
    cells: &PlacementCells,
    remaining: u8,
    card_depth: u8,
    evaluations: &mut u64,
) -> f32 {
    match kind {
        ChanceKind::Known(index) => {
            let mut total = 0.0f32;
            let mut count = 0u32;
            for (x, y) in non_sentinel(cells) {
                let placed = board.with(x, y, index);
                total += max_value(config, placed, deck, remaining, card_depth + 1, evaluations);
                count += 1;
            }
            debug_assert!(count > 0, "a successful shift must leave at least one placement cell");
            total / count as f32
        }

        ChanceKind::Bonus => {
            let max_index = board.max_card_index();
            if max_index < 7 {
                // The bonus index range 4..=(max_index - 3) is empty below index 7: a
                // well-formed game only signals Bonus once a large-enough tile exists, so
                // this is a defensive fallback rather than an expected path.
                *evaluations += 1;
                return config.evaluator().evaluate(board);
            }

            let mut total = 0.0f32;
            let mut count = 0u32;
            for bonus_index in 4..=(max_index - 3) {
                for (x, y) in non_sentinel(cells) {
                    let placed = board.with(x, y, bonus_index);
                    total += max_value(config, placed, deck, remaining, card_depth + 1, evaluations);
                    count += 1;
                }
            }
            total / count as f32
        }

        ChanceKind::Unknown => {
            if card_depth < config.horizon {
                let mut total = 0.0f32;
                let mut weight = 0.0f32;
                for value in 1u8..=3 {
                    let value_count = deck.count(value);
                    if value_count == 0 {
                        continue;
                    }
                    let mut next_deck = deck;
                    next_deck.remove(value);
                    for (x, y) in non_sentinel(cells) {
                        let placed = board.with(x, y, value);
                        let quality = max_value(config, placed, next_deck, remaining, card_depth + 1, evaluations);
                        total += value_count as f32 * quality;
                        weight += value_count as f32;
                    }
                }
                total / weight
            } else {
                // Beyond the horizon: approximate deterministically, without placing a card
                // or consulting the deck, and let the "unknown" treatment keep propagating.
                max_value(config, board, deck, remaining, card_depth + 1, evaluations)
            }
        }
    }
}

/// A MAX node: the maximum quality over the (up to four) directions that change the board.
fn max_value(
    config: &SearchConfig,
    board: PackedBoard,
    deck: DeckCounter,
    remaining: u8,
    card_depth: u8,
    evaluations: &mut u64,
) -> f32 {
    if remaining == 0 {
        *evaluations += 1;
        return config.evaluator().evaluate(board);
    }

    let mut best: Option<f32> = None;
    for dir in ALL_DIRECTIONS {
        let (after, cells, moved) = board.shift(dir);
        if !moved {
            continue;
        }
        let quality = chance_value(config, after, deck, ChanceKind::Unknown, &cells, remaining - 1, card_depth, evaluations);
        if best.is_none_or(|best_quality| quality > best_quality) {
            best = Some(quality);
        }
    }

    match best {
        Some(quality) => quality,
        None => {
            *evaluations += 1;
            config.evaluator().evaluate(board)
        }
    }
}
