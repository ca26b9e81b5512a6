use super::choice::Choice;
use super::odds::Odds;
use crate::cards::street::Street;
use serde::Deserialize;
use serde::Serialize;

/// How many raises the acting seat is facing on this street.
///
/// Preflop the blinds count as the opening bet, so the first voluntary
/// raise already plays from the Open menu's raise sizes. Betting never
/// escalates past the fifth level: facing a 5-bet the menu collapses to
/// fold or call and the street is forced to resolve.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Open = 0,
    TwoBet = 1,
    ThreeBet = 2,
    FourBet = 3,
    FiveBet = 4,
}

impl Level {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Open,
            Self::TwoBet,
            Self::ThreeBet,
            Self::FourBet,
            Self::FiveBet,
        ]
    }

    /// One more raise has gone in. Saturates at the cap.
    pub fn bump(&self) -> Self {
        match self {
            Self::Open => Self::TwoBet,
            Self::TwoBet => Self::ThreeBet,
            Self::ThreeBet => Self::FourBet,
            Self::FourBet => Self::FiveBet,
            Self::FiveBet => Self::FiveBet,
        }
    }

    /// The fixed betting menu for this street and level.
    pub fn menu(&self, street: Street) -> &'static [Choice] {
        match street {
            Street::Preflop => match self {
                Self::Open => &PREF_OPEN,
                Self::TwoBet => &PREF_TWOBET,
                Self::ThreeBet => &PREF_THREEBET,
                Self::FourBet => &PREF_FOURBET,
                Self::FiveBet => &CAPPED,
            },
            _ => match self {
                Self::Open => &POST_OPEN,
                Self::TwoBet => &POST_TWOBET,
                Self::ThreeBet => &POST_THREEBET,
                Self::FourBet => &POST_FOURBET,
                Self::FiveBet => &CAPPED,
            },
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::TwoBet => write!(f, "2bet"),
            Self::ThreeBet => write!(f, "3bet"),
            Self::FourBet => write!(f, "4bet"),
            Self::FiveBet => write!(f, "5bet"),
        }
    }
}

const PREF_OPEN: [Choice; 6] = [
    Choice::Fold,
    Choice::Call,
    Choice::RaiseTo(2),
    Choice::RaiseTo(3),
    Choice::RaiseTo(5),
    Choice::RaiseTo(8),
];
const PREF_TWOBET: [Choice; 7] = [
    Choice::Fold,
    Choice::Call,
    Choice::RaiseTo(5),
    Choice::RaiseTo(8),
    Choice::RaiseTo(13),
    Choice::RaiseTo(21),
    Choice::RaiseTo(34),
];
const PREF_THREEBET: [Choice; 6] = [
    Choice::Fold,
    Choice::Call,
    Choice::RaiseTo(21),
    Choice::RaiseTo(34),
    Choice::RaiseTo(55),
    Choice::RaiseTo(100),
];
const PREF_FOURBET: [Choice; 4] = [
    Choice::Fold,
    Choice::Call,
    Choice::RaiseTo(55),
    Choice::RaiseTo(100),
];
const POST_OPEN: [Choice; 10] = [
    Choice::Check,
    Choice::RaisePot(Odds(1, 3)),
    Choice::RaisePot(Odds(1, 2)),
    Choice::RaisePot(Odds(2, 3)),
    Choice::RaisePot(Odds(3, 4)),
    Choice::RaisePot(Odds(1, 1)),
    Choice::RaisePot(Odds(5, 4)),
    Choice::RaisePot(Odds(3, 2)),
    Choice::RaisePot(Odds(2, 1)),
    Choice::RaisePot(Odds(3, 1)),
];
const POST_TWOBET: [Choice; 9] = [
    Choice::Fold,
    Choice::Call,
    Choice::RaisePot(Odds(1, 2)),
    Choice::RaisePot(Odds(3, 4)),
    Choice::RaisePot(Odds(1, 1)),
    Choice::RaisePot(Odds(5, 4)),
    Choice::RaisePot(Odds(3, 2)),
    Choice::RaisePot(Odds(2, 1)),
    Choice::RaisePot(Odds(3, 1)),
];
const POST_THREEBET: [Choice; 8] = [
    Choice::Fold,
    Choice::Call,
    Choice::RaisePot(Odds(2, 3)),
    Choice::RaisePot(Odds(1, 1)),
    Choice::RaisePot(Odds(5, 4)),
    Choice::RaisePot(Odds(3, 2)),
    Choice::RaisePot(Odds(2, 1)),
    Choice::RaisePot(Odds(3, 1)),
];
const POST_FOURBET: [Choice; 7] = [
    Choice::Fold,
    Choice::Call,
    Choice::RaisePot(Odds(1, 1)),
    Choice::RaisePot(Odds(5, 4)),
    Choice::RaisePot(Odds(3, 2)),
    Choice::RaisePot(Odds(2, 1)),
    Choice::RaisePot(Odds(3, 1)),
];
const CAPPED: [Choice; 2] = [Choice::Fold, Choice::Call];
