use super::card::Card;
use super::hand::Hand;
use serde::Deserialize;
use serde::Serialize;

/// The two private cards dealt to one seat.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hole(Hand);

impl Hole {
    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    /// Higher of the two cards, by rank then suit.
    pub fn hi(&self) -> Card {
        let cards = Vec::<Card>::from(self.0);
        cards
            .iter()
            .copied()
            .max_by_key(|c| (c.rank(), c.suit()))
            .unwrap_or_else(|| panic!("empty hole"))
    }
    /// Lower of the two cards, by rank then suit.
    pub fn lo(&self) -> Card {
        let cards = Vec::<Card>::from(self.0);
        cards
            .iter()
            .copied()
            .min_by_key(|c| (c.rank(), c.suit()))
            .unwrap_or_else(|| panic!("empty hole"))
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hand> for Hole {
    fn from(hand: Hand) -> Self {
        assert!(hand.size() == 2);
        Self(hand)
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from(cards: (Card, Card)) -> Self {
        let a = u64::from(cards.0);
        let b = u64::from(cards.1);
        let hand = Hand::from(a | b);
        assert!(a != b);
        Self(hand)
    }
}

impl TryFrom<&str> for Hole {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(s)?;
        if hand.size() == 2 {
            Ok(Self(hand))
        } else {
            Err("hole must hold exactly two cards")
        }
    }
}
