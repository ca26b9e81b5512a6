use crate::cards::hole::Hole;
use crate::cards::rank::Rank;
use serde::Deserialize;
use serde::Serialize;

/// A hole collapsed to its preflop equivalence class.
///
/// Suits only matter before the flop through suitedness, so the 1326
/// distinct holes fold down to 169 classes: 13 pairs, 78 suited and 78
/// offsuit combos. Classes index into the familiar 13x13 chart with
/// Aces in the top left corner, suited hands above the pair diagonal
/// and offsuit hands below it.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Holding {
    hi: Rank,
    lo: Rank,
    suited: bool,
}

impl Holding {
    pub const COUNT: usize = 169;

    pub fn hi(&self) -> Rank {
        self.hi
    }
    pub fn lo(&self) -> Rank {
        self.lo
    }
    pub fn suited(&self) -> bool {
        self.suited
    }

    /// Position in the flattened 13x13 chart.
    pub fn index(&self) -> usize {
        let a = |rank: Rank| 12 - u8::from(rank) as usize;
        match self.suited {
            true => a(self.hi) * 13 + a(self.lo),
            false => a(self.lo) * 13 + a(self.hi),
        }
    }
}

impl From<Hole> for Holding {
    fn from(hole: Hole) -> Self {
        let hi = hole.hi();
        let lo = hole.lo();
        Self {
            hi: hi.rank(),
            lo: lo.rank(),
            suited: hi.suit() == lo.suit(),
        }
    }
}

impl TryFrom<&str> for Holding {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hi = Rank::try_from(s.get(0..1).ok_or("no high rank")?)?;
        let lo = Rank::try_from(s.get(1..2).ok_or("no low rank")?)?;
        if lo > hi {
            return Err("ranks out of order");
        }
        match (s.get(2..), hi == lo) {
            (None, true) => Ok(Self { hi, lo, suited: false }),
            (Some("s"), false) => Ok(Self { hi, lo, suited: true }),
            (Some("o"), false) => Ok(Self { hi, lo, suited: false }),
            _ => Err("expected a pair, or a suffix of s or o"),
        }
    }
}

impl std::fmt::Display for Holding {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.hi == self.lo {
            write!(f, "{}{}", self.hi, self.lo)
        } else if self.suited {
            write!(f, "{}{}s", self.hi, self.lo)
        } else {
            write!(f, "{}{}o", self.hi, self.lo)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_corners() {
        assert!(Holding::try_from("AA").unwrap().index() == 0);
        assert!(Holding::try_from("AKs").unwrap().index() == 1);
        assert!(Holding::try_from("AKo").unwrap().index() == 13);
        assert!(Holding::try_from("22").unwrap().index() == 168);
        assert!(Holding::try_from("A2s").unwrap().index() == 12);
        assert!(Holding::try_from("A2o").unwrap().index() == 12 * 13);
    }

    #[test]
    fn indices_cover_the_chart() {
        use std::collections::HashSet;
        let mut seen = HashSet::new();
        for hi in 0..13u8 {
            for lo in 0..=hi {
                let hi = Rank::from(hi);
                let lo = Rank::from(lo);
                if hi == lo {
                    seen.insert(Holding { hi, lo, suited: false }.index());
                } else {
                    seen.insert(Holding { hi, lo, suited: true }.index());
                    seen.insert(Holding { hi, lo, suited: false }.index());
                }
            }
        }
        assert!(seen.len() == Holding::COUNT);
        assert!(seen.iter().all(|i| *i < Holding::COUNT));
    }

    #[test]
    fn suits_collapse() {
        let a = Holding::from(Hole::try_from("Ah Kh").unwrap());
        let b = Holding::from(Hole::try_from("Ad Kd").unwrap());
        let c = Holding::from(Hole::try_from("Ah Kd").unwrap());
        assert!(a == b);
        assert!(a != c);
        assert!(a == Holding::try_from("AKs").unwrap());
        assert!(c == Holding::try_from("AKo").unwrap());
    }

    #[test]
    fn order_of_dealt_cards_is_ignored() {
        let a = Holding::from(Hole::try_from("7c 2d").unwrap());
        assert!(a == Holding::try_from("72o").unwrap());
        assert!(format!("{}", a) == "72o");
    }
}
