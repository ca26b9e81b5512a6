use super::card::Card;
use super::hand::Hand;
use super::street::Street;
use serde::Deserialize;
use serde::Serialize;

/// The community cards visible to all seats.
///
/// Holds 0, 3, 4, or 5 cards across preflop, flop, turn, and river.
/// Cards accumulate as streets are revealed and never leave until the
/// next hand clears the board.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board(Hand);

impl Board {
    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    pub fn add(&mut self, hand: Hand) {
        self.0 = Hand::add(self.0, hand);
    }
    pub fn clear(&mut self) {
        self.0 = Hand::empty();
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn street(&self) -> Street {
        Street::from(self.0.size())
    }
}

/// Board isomorphism
/// Board -> Hand is infallible
/// Hand -> Board should select at 0, 3, 4, 5 cards
impl From<Hand> for Board {
    fn from(hand: Hand) -> Self {
        debug_assert!(hand.size() != 1);
        debug_assert!(hand.size() != 2);
        debug_assert!(hand.size() <= 5);
        Self(hand)
    }
}
impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Vec::<Card>::from(self.0)
                .into_iter()
                .map(|c| format!("{}", c))
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}
