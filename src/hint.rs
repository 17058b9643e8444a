//! The next-card hint the real game exposes to the player before they commit to a move.

/// What the player knows about the upcoming card: its exact value if it's a 1, 2, or 3, or
/// just the fact that it's a high-value bonus card of unknown exact value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextCardHint {
    One,
    Two,
    Three,
    Bonus,
}

impl NextCardHint {
    /// The known card index for One/Two/Three; `None` for Bonus (see 4.F for how the search
    /// handles bonus placement instead).
    pub fn known_index(self) -> Option<u8> {
        match self {
            NextCardHint::One => Some(1),
            NextCardHint::Two => Some(2),
            NextCardHint::Three => Some(3),
            NextCardHint::Bonus => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_hints_map_to_their_index() {
        assert_eq!(NextCardHint::One.known_index(), Some(1));
        assert_eq!(NextCardHint::Two.known_index(), Some(2));
        assert_eq!(NextCardHint::Three.known_index(), Some(3));
    }

    #[test]
    fn bonus_hint_has_no_known_index() {
        assert_eq!(NextCardHint::Bonus.known_index(), None);
    }
}
