use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::strength::Strength;
use super::suit::Suit;

const WHEEL: u16 = 0b_1000000001111;

/// Finds the best five-card hand inside a set of cards.
///
/// The card set doubles as its own histogram: rank counts live in the
/// nibbles of the u64 and suit counts in its four 13-bit lanes, so
/// every category check is a handful of masks and shifts. Community
/// cards can be revealed one street at a time and the evaluation always
/// reflects everything seen so far.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator(Hand);

impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn empty() -> Self {
        Self(Hand::empty())
    }

    /// Adds newly visible cards. Panics on a duplicate card, since a
    /// card can never be seen twice in one hand.
    pub fn reveal(&mut self, cards: Hand) {
        self.0 = Hand::add(self.0, cards);
    }

    pub fn seen(&self) -> Hand {
        self.0
    }

    /// Best five-card strength over all cards seen so far.
    pub fn strength(&self) -> Strength {
        let ranking = self.ranking();
        let kickers = self.kickers(ranking);
        Strength::from((ranking, kickers))
    }

    fn ranking(&self) -> Ranking {
        None.or_else(|| self.straight_flush())
            .or_else(|| self.four_oak())
            .or_else(|| self.full_house())
            .or_else(|| self.flush())
            .or_else(|| self.straight())
            .or_else(|| self.three_oak())
            .or_else(|| self.pairs())
            .or_else(|| self.high_card())
            .expect("at least one card")
    }

    fn kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::from(0),
            n => {
                let hand = u16::from(self.0);
                let mask = ranking.mask();
                let mut rank = hand & mask;
                while n < rank.count_ones() as usize {
                    let last = rank.trailing_zeros();
                    let flip = 1 << last;
                    let skip = !flip;
                    rank &= skip;
                }
                Kickers::from(rank as u32)
            }
        }
    }

    fn high_card(&self) -> Option<Ranking> {
        self.n_oak(1).map(Ranking::HighCard)
    }
    fn pairs(&self) -> Option<Ranking> {
        self.n_oak(2).map(|hi| {
            self.n_oak_below(2, hi)
                .map(|lo| Ranking::TwoPair(hi, lo))
                .unwrap_or(Ranking::OnePair(hi))
        })
    }
    fn three_oak(&self) -> Option<Ranking> {
        self.n_oak(3).map(Ranking::ThreeOAK)
    }
    fn four_oak(&self) -> Option<Ranking> {
        self.n_oak(4).map(Ranking::FourOAK)
    }
    fn full_house(&self) -> Option<Ranking> {
        self.n_oak(3).and_then(|triple| {
            self.n_oak_below(2, triple)
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn straight(&self) -> Option<Ranking> {
        self.straight_high(self.0).map(Ranking::Straight)
    }
    fn flush(&self) -> Option<Ranking> {
        self.flush_suit().map(|suit| {
            let bits = u16::from(self.0.of(&suit));
            let rank = Rank::from(bits);
            Ranking::Flush(rank)
        })
    }
    fn straight_flush(&self) -> Option<Ranking> {
        self.flush_suit()
            .and_then(|suit| self.straight_high(self.0.of(&suit)))
            .map(Ranking::StraightFlush)
    }

    /// Highest rank completing a five-card run, wheel included.
    fn straight_high(&self, hand: Hand) -> Option<Rank> {
        let ranks = u16::from(hand);
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(Rank::Five)
        } else {
            None
        }
    }
    fn flush_suit(&self) -> Option<Suit> {
        Suit::all()
            .map(|s| u64::from(s))
            .map(|u| u64::from(self.0) & u)
            .map(|n| n.count_ones() as u8)
            .iter()
            .position(|&n| n >= 5)
            .map(|i| Suit::from(i as u8))
    }
    fn n_oak(&self, n: usize) -> Option<Rank> {
        self.scan(n, None)
    }
    fn n_oak_below(&self, n: usize, skip: Rank) -> Option<Rank> {
        self.scan(n, Some(skip))
    }
    /// Scans rank nibbles from Ace down for the first with n cards,
    /// optionally skipping the rank already claimed by the category.
    fn scan(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        let mut high = u64::from(Rank::Ace) << 4;
        while high > 0 {
            high >>= 4;
            if let Some(skip) = skip {
                if high & u64::from(skip) != 0 {
                    continue;
                }
            }
            let mine = u64::from(self.0) & high;
            if mine.count_ones() >= n as u32 {
                return Some(Rank::from((high.trailing_zeros() / 4) as u8));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(s: &str) -> (Ranking, Kickers) {
        let eval = Evaluator::from(Hand::try_from(s).unwrap());
        let strength = eval.strength();
        (strength.ranking(), strength.kickers())
    }

    #[rustfmt::skip]
    #[test]
    fn high_card() {
        let (ranking, kickers) = strength("As Kh Qd Jc 9s");
        assert_eq!(ranking, Ranking::HighCard(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[rustfmt::skip]
    #[test]
    fn one_pair() {
        let (ranking, kickers) = strength("As Ah Kd Qc Js");
        assert_eq!(ranking, Ranking::OnePair(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]));
    }

    #[test]
    fn two_pair() {
        let (ranking, kickers) = strength("As Ah Kd Kc Qs");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_oak() {
        let (ranking, kickers) = strength("As Ah Ad Kc Qs");
        assert_eq!(ranking, Ranking::ThreeOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen]));
    }

    #[test]
    fn straight() {
        let (ranking, kickers) = strength("Ts Jh Qd Kc As");
        assert_eq!(ranking, Ranking::Straight(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn flush() {
        let (ranking, kickers) = strength("As Ks Qs Js 9s");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn full_house() {
        let (ranking, kickers) = strength("2s 2h 2d 3c 3s");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Two, Rank::Three));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn four_oak() {
        let (ranking, kickers) = strength("As Ah Ad Ac Ks");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush() {
        let (ranking, kickers) = strength("Ts Js Qs Ks As");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn wheel_straight() {
        let (ranking, kickers) = strength("As 2h 3d 4c 5s");
        assert_eq!(ranking, Ranking::Straight(Rank::Five));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn wheel_straight_flush() {
        let (ranking, kickers) = strength("As 2s 3s 4s 5s");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Five));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn seven_card_hand() {
        let (ranking, kickers) = strength("As Ah Kd Kc Qs Jh 9d");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn flush_over_straight() {
        let (ranking, kickers) = strength("4h 6h 7h 8h 9h Ts");
        assert_eq!(ranking, Ranking::Flush(Rank::Nine));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn full_house_over_flush() {
        let (ranking, kickers) = strength("Kh Ah Ad As Ks Qs Js 9s");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn four_oak_over_full_house() {
        let (ranking, kickers) = strength("As Ah Ad Ac Ks Kh Qd");
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush_over_four_oak() {
        let (ranking, kickers) = strength("Ts Js Qs Ks As Ah Ad Ac");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn six_card_straight() {
        let (ranking, kickers) = strength("As 2s 3h 4d 5c 6s");
        assert_eq!(ranking, Ranking::Straight(Rank::Six));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn three_pair() {
        let (ranking, kickers) = strength("As Ah Kd Kc Qs Qh Jd");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn two_three_oak() {
        let (ranking, kickers) = strength("As Ah Ad Kc Ks Kh Qd");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![]));
    }

    #[test]
    fn incremental_reveal_matches_scratch() {
        let hole = Hand::try_from("Ah Kh").unwrap();
        let flop = Hand::try_from("Qh Jh 2c").unwrap();
        let turn = Hand::try_from("Th").unwrap();
        let mut eval = Evaluator::from(hole);
        eval.reveal(flop);
        let mut scratch = Hand::add(hole, flop);
        assert_eq!(eval.strength(), Strength::from(scratch));
        eval.reveal(turn);
        scratch = Hand::add(scratch, turn);
        assert_eq!(eval.strength(), Strength::from(scratch));
        assert_eq!(eval.strength().ranking(), Ranking::StraightFlush(Rank::Ace));
    }

    #[test]
    fn reordering_cards_is_irrelevant() {
        let (a, ka) = strength("As Kh Qd Jc 9s 2h 7d");
        let (b, kb) = strength("7d 2h 9s Jc Qd Kh As");
        assert_eq!(a, b);
        assert_eq!(ka, kb);
    }
}
