use super::odds::Odds;
use crate::Chips;
use serde::Deserialize;
use serde::Serialize;

/// One entry of a betting menu, sizes still symbolic.
///
/// Preflop raises are quoted as the total stake to raise to, in big
/// blinds. Postflop raises are quoted as a fraction of the pot. Either
/// way the round turns the pick into a concrete [`Action`] at the
/// moment it is applied, so a menu can be shared by every situation at
/// its street and bet level.
///
/// [`Action`]: super::action::Action
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Choice {
    Fold,
    Check,
    Call,
    RaiseTo(Chips),
    RaisePot(Odds),
}

impl Choice {
    pub fn is_raise(&self) -> bool {
        matches!(self, Choice::RaiseTo(_) | Choice::RaisePot(_))
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Choice::Fold => write!(f, "fold"),
            Choice::Check => write!(f, "check"),
            Choice::Call => write!(f, "call"),
            Choice::RaiseTo(bb) => write!(f, "raise to {}bb", bb),
            Choice::RaisePot(odds) => write!(f, "raise {} pot", odds),
        }
    }
}
