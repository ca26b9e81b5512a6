use crate::Chips;
use crate::cards::hand::Hand;
use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;

/// A concrete event applied to the hand, chips and cards fully bound.
///
/// Players never produce these directly. They pick from a menu of
/// [`Choice`](super::choice::Choice)s and the round resolves the pick
/// into one of these, clamping sizes against stacks as needed.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Action {
    Draw(Hand),
    Fold,
    Check,
    Call(Chips),
    Raise(Chips),
    Shove(Chips),
    Blind(Chips),
}

impl Action {
    /// Chips this action moves into the pot.
    pub fn cost(&self) -> Chips {
        match self {
            Action::Call(chips)
            | Action::Raise(chips)
            | Action::Shove(chips)
            | Action::Blind(chips) => *chips,
            Action::Draw(_) | Action::Fold | Action::Check => 0,
        }
    }
    pub fn is_chance(&self) -> bool {
        matches!(self, Action::Draw(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Draw(hand) => write!(f, "{}", format!("DEAL  {}", hand).white()),
            Action::Check => write!(f, "{}", "CHECK".cyan()),
            Action::Fold => write!(f, "{}", "FOLD".red()),
            Action::Blind(chips) => write!(f, "{}", format!("BLIND {}", chips).white()),
            Action::Call(chips) => write!(f, "{}", format!("CALL  {}", chips).yellow()),
            Action::Raise(chips) => write!(f, "{}", format!("RAISE {}", chips).green()),
            Action::Shove(chips) => write!(f, "{}", format!("SHOVE {}", chips).magenta()),
        }
    }
}
