//! The 256-entry per-pair transition tables that fold the merge rule into two O(1) lookups.
//!
//! Keyed by `s | (d << 4)` where `s` is the card farther from the destination edge (the
//! source) and `d` is the card nearer it (the destination). `DEST[key]` and `SRC[key]` give
//! the post-transition values of the destination and source cells respectively.

use std::sync::OnceLock;

/// Applies the line-level merge rule to one (source, destination) pair.
const fn merge_pair(s: u8, d: u8) -> (u8, u8) {
    if d == 0 && s != 0 {
        (0, s)
    } else if s == 0 {
        (0, d)
    } else if (s == 1 && d == 2) || (s == 2 && d == 1) {
        (0, 3)
    } else if s == d && s >= 3 {
        let merged = s + 1;
        (0, if merged <= 15 { merged } else { 15 })
    } else {
        (s, d)
    }
}

struct PairTables {
    dest: [u8; 256],
    src: [u8; 256],
}

fn tables() -> &'static PairTables {
    static TABLES: OnceLock<PairTables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut dest = [0u8; 256];
        let mut src = [0u8; 256];
        for s in 0u16..16 {
            for d in 0u16..16 {
                let key = (s | (d << 4)) as usize;
                let (new_s, new_d) = merge_pair(s as u8, d as u8);
                src[key] = new_s;
                dest[key] = new_d;
            }
        }
        PairTables { dest, src }
    })
}

/// The post-merge destination value for source `s` meeting destination `d`.
#[inline]
pub fn dest_value(s: u8, d: u8) -> u8 {
    tables().dest[(s as usize) | ((d as usize) << 4)]
}

/// The post-merge source value for source `s` meeting destination `d`.
#[inline]
pub fn src_value(s: u8, d: u8) -> u8 {
    tables().src[(s as usize) | ((d as usize) << 4)]
}

/// Applies one pairwise merge step to a (source, destination) pair, returning the new
/// (source, destination) values.
#[inline]
pub fn merge_step(s: u8, d: u8) -> (u8, u8) {
    let key = (s as usize) | ((d as usize) << 4);
    let t = tables();
    (t.src[key], t.dest[key])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sink_absorbs() {
        assert_eq!(merge_step(5, 0), (0, 5));
    }

    #[test]
    fn empty_source_is_unchanged() {
        assert_eq!(merge_step(0, 7), (0, 7));
    }

    #[test]
    fn one_and_two_merge_to_three_either_order() {
        assert_eq!(merge_step(1, 2), (0, 3));
        assert_eq!(merge_step(2, 1), (0, 3));
    }

    #[test]
    fn equal_high_cards_double() {
        assert_eq!(merge_step(4, 4), (0, 5));
        assert_eq!(merge_step(9, 9), (0, 10));
    }

    #[test]
    fn one_and_one_do_not_merge() {
        assert_eq!(merge_step(1, 1), (1, 1));
    }

    #[test]
    fn non_adjacent_ladder_values_do_not_merge() {
        assert_eq!(merge_step(1, 3), (1, 3));
        assert_eq!(merge_step(2, 3), (2, 3));
    }

    #[test]
    fn every_pair_matches_literal_rule_tabulation() {
        for s in 0u8..16 {
            for d in 0u8..16 {
                let (new_s, new_d) = merge_step(s, d);
                let expected = if d == 0 && s != 0 {
                    (0, s)
                } else if s == 0 {
                    (0, d)
                } else if (s == 1 && d == 2) || (s == 2 && d == 1) {
                    (0, 3)
                } else if s == d && s >= 3 {
                    (0, (s + 1).min(15))
                } else {
                    (s, d)
                };
                assert_eq!((new_s, new_d), expected, "s={s} d={d}");
            }
        }
    }
}
