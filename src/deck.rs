//! The deck counter: how many 1s, 2s, and 3s remain in the draw bag, with auto-refill.

/// The number of each low card in a full bag.
const FULL_BAG: u8 = 4;

/// A counter of remaining 1/2/3 cards in the draw bag. When all three counts reach zero the
/// bag immediately refills to (4, 4, 4); bonus cards are never tracked here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DeckCounter {
    ones: u8,
    twos: u8,
    threes: u8,
}

impl DeckCounter {
    /// A freshly-refilled bag: four of each of 1, 2, 3.
    pub const FULL: DeckCounter = DeckCounter {
        ones: FULL_BAG,
        twos: FULL_BAG,
        threes: FULL_BAG,
    };

    /// Builds a counter from explicit remaining counts, each expected to be in 0..=4.
    pub fn new(ones: u8, twos: u8, threes: u8) -> DeckCounter {
        let mut counter = DeckCounter { ones, twos, threes };
        counter.refill_if_empty();
        counter
    }

    pub fn ones(self) -> u8 {
        self.ones
    }

    pub fn twos(self) -> u8 {
        self.twos
    }

    pub fn threes(self) -> u8 {
        self.threes
    }

    /// The remaining count of card index `index` (1, 2, or 3); any other index is 0.
    pub fn count(self, index: u8) -> u8 {
        match index {
            1 => self.ones,
            2 => self.twos,
            3 => self.threes,
            _ => 0,
        }
    }

    pub fn remove_one(&mut self) {
        self.ones = self.ones.saturating_sub(1);
        self.refill_if_empty();
    }

    pub fn remove_two(&mut self) {
        self.twos = self.twos.saturating_sub(1);
        self.refill_if_empty();
    }

    pub fn remove_three(&mut self) {
        self.threes = self.threes.saturating_sub(1);
        self.refill_if_empty();
    }

    /// Removes one card of `index` (1, 2, or 3); any other index is a no-op.
    pub fn remove(&mut self, index: u8) {
        match index {
            1 => self.remove_one(),
            2 => self.remove_two(),
            3 => self.remove_three(),
            _ => {}
        }
    }

    fn refill_if_empty(&mut self) {
        if self.ones == 0 && self.twos == 0 && self.threes == 0 {
            *self = DeckCounter::FULL;
        }
    }
}

/// Builds a deck counter from a logical multiset of remaining 1/2/3 cards, such as a hand
/// count taken from a scanned physical deck.
pub fn deck_counter_from_logical(values: impl IntoIterator<Item = u32>) -> DeckCounter {
    let mut ones = 0u8;
    let mut twos = 0u8;
    let mut threes = 0u8;
    for v in values {
        match v {
            1 => ones += 1,
            2 => twos += 1,
            3 => threes += 1,
            _ => {}
        }
    }
    DeckCounter::new(ones, twos, threes)
}
