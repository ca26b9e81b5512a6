use crate::round::Choice;
use crate::strategy::Spot;
use crate::table::GameId;

/// Everything that can go wrong while running a hand.
///
/// Most betting mistakes are recoverable (the table folds the offender),
/// so only genuinely exceptional conditions surface here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The deck was asked for more cards than it holds.
    #[error("dealt {requested} cards with only {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },
    /// A rotation query ran a full lap without finding a live seat.
    #[error("no active seats remain")]
    NoActiveSeats,
    /// A decision point produced a key the strategy sheet never registered.
    #[error("no strategy registered for {0}")]
    UnknownSituation(Spot),
    /// A player chose an action outside the legal menu.
    #[error("illegal action {0}")]
    IllegalAction(Choice),
    /// A lobby call referenced a table id that was never opened.
    #[error("unknown table {0}")]
    UnknownTable(GameId),
}
