use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use super::street::Street;
use crate::error::Error;
use rand::Rng;
use rand::seq::SliceRandom;

/// A shuffled deck that deals from the top.
///
/// Unlike a plain card set, deal order matters here. The deck keeps a
/// cursor into a permuted array so dealing is O(1) and a reshuffle only
/// ever permutes cards still behind the cursor. Randomness comes from
/// the caller, which keeps hands reproducible under a fixed seed.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    drawn: usize,
}

impl Deck {
    /// Builds a full 52-card deck and shuffles it.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut deck = Self {
            cards: (0u8..52).map(Card::from).collect(),
            drawn: 0,
        };
        deck.shuffle(rng);
        deck
    }

    /// Permutes the undealt portion of the deck in place.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        let drawn = self.drawn;
        self.cards[drawn..].shuffle(rng);
    }

    /// Returns every dealt card and reshuffles the full deck.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.drawn = 0;
        self.shuffle(rng);
    }

    pub fn remaining(&self) -> usize {
        self.cards.len() - self.drawn
    }

    /// Deals the next n cards off the top.
    ///
    /// Fails without dealing anything when fewer than n remain.
    pub fn deal(&mut self, n: usize) -> Result<Hand, Error> {
        if n > self.remaining() {
            return Err(Error::InsufficientCards {
                requested: n,
                remaining: self.remaining(),
            });
        }
        let dealt = self.cards[self.drawn..self.drawn + n].to_vec();
        self.drawn += n;
        Ok(Hand::from(dealt))
    }

    /// Deals two cards as one seat's hole.
    pub fn hole(&mut self) -> Result<Hole, Error> {
        self.deal(2).map(Hole::from)
    }

    /// Deals the community cards that open the given street.
    pub fn reveal(&mut self, street: Street) -> Result<Hand, Error> {
        self.deal(street.n_revealed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn deals_unique_cards() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new(rng);
        let dealt = deck.deal(52).unwrap();
        assert!(dealt.size() == 52);
        assert!(deck.remaining() == 0);
    }

    #[test]
    fn overdeal_is_an_error() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new(rng);
        deck.deal(50).unwrap();
        let result = deck.deal(3);
        assert!(
            result
                == Err(Error::InsufficientCards {
                    requested: 3,
                    remaining: 2,
                })
        );
        assert!(deck.remaining() == 2);
    }

    #[test]
    fn reset_restores_all_cards() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new(rng);
        deck.deal(30).unwrap();
        deck.reset(rng);
        assert!(deck.remaining() == 52);
        assert!(deck.deal(52).unwrap().size() == 52);
    }

    #[test]
    fn seeded_deals_are_reproducible() {
        let ref mut a = SmallRng::seed_from_u64(42);
        let ref mut b = SmallRng::seed_from_u64(42);
        let mut x = Deck::new(a);
        let mut y = Deck::new(b);
        assert!(x.deal(52).unwrap() == y.deal(52).unwrap());
        x.reset(a);
        y.reset(b);
        assert!(x.hole().unwrap() == y.hole().unwrap());
    }

    #[test]
    fn reveal_follows_street_sizes() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::new(rng);
        assert!(deck.reveal(Street::Preflop).unwrap().size() == 3);
        assert!(deck.reveal(Street::Flop).unwrap().size() == 1);
        assert!(deck.reveal(Street::Turn).unwrap().size() == 1);
    }

    #[test]
    fn shuffle_preserves_dealt_cards() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut deck = Deck::new(rng);
        let dealt = deck.deal(10).unwrap();
        deck.shuffle(rng);
        let rest = deck.deal(42).unwrap();
        assert!(u64::from(dealt) & u64::from(rest) == 0);
        assert!(Hand::add(dealt, rest).size() == 52);
    }
}
