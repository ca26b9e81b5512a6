use crate::Chips;
use crate::cards::board::Board;
use crate::cards::hole::Hole;
use crate::cards::strength::Strength;
use serde::Deserialize;
use serde::Serialize;

/// Why a hand ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Over {
    /// Everyone folded to one seat, no cards shown.
    FoldOut,
    /// The river closed with two or more live seats.
    Showdown,
    /// The host tore the hand down mid-flight.
    Abandoned,
}

impl std::fmt::Display for Over {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::FoldOut => write!(f, "folded out"),
            Self::Showdown => write!(f, "showdown"),
            Self::Abandoned => write!(f, "abandoned"),
        }
    }
}

/// One revealed hand at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub seat: usize,
    pub hole: Hole,
    pub strength: Strength,
}

/// The settled outcome of one complete hand.
///
/// `winner` is the earliest winning seat clockwise from the button,
/// which is also the seat any odd chip goes to. `rewards` is indexed by
/// seat and sums to `pot`. Hole cards appear in `shows` only when a
/// showdown actually forced them face up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    pub over: Over,
    pub winner: usize,
    pub pot: Chips,
    pub board: Board,
    pub rewards: Vec<Chips>,
    pub shows: Option<Vec<Show>>,
}

impl HandResult {
    /// Every seat that got paid, split pots included.
    pub fn winners(&self) -> Vec<usize> {
        self.rewards
            .iter()
            .enumerate()
            .filter(|(_, reward)| **reward > 0)
            .map(|(seat, _)| seat)
            .collect()
    }
}

impl std::fmt::Display for HandResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} pot {} to seat {} [{}]",
            self.over, self.pot, self.winner, self.board,
        )
    }
}
