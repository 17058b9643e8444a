//! The card ladder: 4-bit card indices, their face values, and their end-of-game scores.
//!
//! Index 0 is the empty cell. Indices 1-2 are the 1 and 2 cards, which merge into the 3
//! card (index 3). From index 3 upward the ladder doubles: index k has face value
//! `3 * 2^(k - 3)` and end-of-game score `3^(k - 2)`.

use std::sync::OnceLock;

use crate::utils::prelude::*;

/// Highest legal card index (a 4-bit value).
pub const MAX_INDEX: u8 = 15;

/// index -> face value, e.g. `VALUE[4] == 6`.
pub const VALUE: [u32; 16] = [
    0, 1, 2, 3, 6, 12, 24, 48, 96, 192, 384, 768, 1536, 3072, 6144, 12288,
];

/// index -> end-of-game score, e.g. `SCORE[4] == 9`.
pub const SCORE: [u32; 16] = [
    0, 0, 0, 3, 9, 27, 81, 243, 729, 2187, 6561, 19683, 59049, 177147, 531441, 1594323,
];

const fn compute_value(index: u8) -> u32 {
    match index {
        0 => 0,
        1 => 1,
        2 => 2,
        k => 3 * (1u32 << (k as u32 - 3)),
    }
}

const fn compute_score(index: u8) -> u32 {
    match index {
        0 | 1 | 2 => 0,
        k => {
            let mut result: u32 = 1;
            let mut i = 0;
            while i < (k as u32 - 2) {
                result *= 3;
                i += 1;
            }
            result
        }
    }
}

fn reverse_table() -> &'static HashMap<u32, u8> {
    static TABLE: OnceLock<HashMap<u32, u8>> = OnceLock::new();
    TABLE.get_or_init(|| (0u8..16).map(|i| (VALUE[i as usize], i)).collect())
}

/// Maps a face value back to its card index. Returns an error for any value that is not
/// one of the sixteen legal face values on the ladder — this is a programmer error, not an
/// in-game outcome, since no legal rule ever produces an off-ladder value.
pub fn index_for_value(value: u32) -> Result<u8> {
    reverse_table()
        .get(&value)
        .copied()
        .ok_or_else(|| anyhow!("{value} is not a legal Threes card value"))
}
