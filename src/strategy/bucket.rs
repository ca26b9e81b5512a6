use crate::Chips;
use crate::cards::street::Street;
use crate::round::level::Level;
use serde::Deserialize;
use serde::Serialize;
use std::ops::Range;

/// Pot sizes a strategy distinguishes, in big blinds.
pub const LADDER: [Chips; 9] = [5, 10, 20, 40, 70, 100, 150, 200, 300];

/// A rung on the pot-size ladder.
///
/// Strategies never key on an exact pot. The pot in big blinds rounds
/// up to the nearest rung, and each street and level only ever sees a
/// window of rungs: a 4-bet pot is never five blinds deep, so its
/// window starts higher and shallow rungs are clamped up into it.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Bucket(usize);

impl Bucket {
    /// The rungs reachable at this street and level. Unopened preflop
    /// pots are always exactly one blind and a half, so they key on
    /// nothing at all.
    pub fn window(street: Street, level: Level) -> Option<Range<usize>> {
        match (street, level) {
            (Street::Preflop, Level::Open) => None,
            (Street::Preflop, Level::TwoBet) => Some(0..4),
            (Street::Preflop, Level::ThreeBet) => Some(1..6),
            (Street::Preflop, Level::FourBet) => Some(2..8),
            (Street::Preflop, Level::FiveBet) => Some(3..9),
            (_, Level::FourBet) => Some(2..9),
            (_, Level::FiveBet) => Some(3..9),
            (_, _) => Some(0..9),
        }
    }

    /// Smallest rung in the window covering the given pot, or the top
    /// of the window when the pot overflows it.
    pub fn nearest(blinds: Chips, window: Range<usize>) -> Self {
        assert!(!window.is_empty());
        window
            .clone()
            .find(|rung| LADDER[*rung] >= blinds)
            .map(Self)
            .unwrap_or(Self(window.end - 1))
    }

    /// Pot size at this rung, in big blinds.
    pub fn blinds(&self) -> Chips {
        LADDER[self.0]
    }
}

/// usize isomorphism
/// useful for enumerating the rungs of a window
impl From<usize> for Bucket {
    fn from(rung: usize) -> Self {
        assert!(rung < LADDER.len());
        Self(rung)
    }
}
impl From<Bucket> for usize {
    fn from(bucket: Bucket) -> Self {
        bucket.0
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}bb", self.blinds())
    }
}
