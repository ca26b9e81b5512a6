use super::result::Over;
use crate::cards::street::Street;

/// Whose move it is, seat, dealer, or nobody.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Turn {
    /// The hand is over for the given reason.
    Terminal(Over),
    /// The dealer owes the cards that open the given street.
    Chance(Street),
    /// The given seat owes a decision.
    Choice(usize),
}

impl Turn {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal(_))
    }
    pub fn is_chance(&self) -> bool {
        matches!(self, Self::Chance(_))
    }
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Choice(_))
    }
}
