use crate::Chips;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;

/// A pot fraction for sizing postflop bets and raises.
///
/// Stored as a reduced rational so menus stay exact and hashable.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Odds(pub Chips, pub Chips);

impl From<Odds> for Probability {
    fn from(odds: Odds) -> Self {
        odds.0 as Probability / odds.1 as Probability
    }
}

impl From<(Chips, Chips)> for Odds {
    fn from((a, b): (Chips, Chips)) -> Self {
        let gcd = Self::gcd(a, b);
        Self(a / gcd, b / gcd)
    }
}

impl Odds {
    fn gcd(a: Chips, b: Chips) -> Chips {
        let (mut a, mut b) = (a, b);
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a.max(1)
    }

    /// Chips this fraction of the given pot comes to, rounded down.
    pub fn of(&self, pot: Chips) -> Chips {
        pot * self.0 / self.1
    }
}

impl std::fmt::Display for Odds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction() {
        assert!(Odds::from((2, 4)) == Odds(1, 2));
        assert!(Odds::from((3, 1)) == Odds(3, 1));
    }

    #[test]
    fn pot_fractions() {
        assert!(Odds(1, 2).of(12) == 6);
        assert!(Odds(2, 3).of(12) == 8);
        assert!(Odds(3, 1).of(12) == 36);
        assert!(Odds(1, 3).of(10) == 3);
    }
}
