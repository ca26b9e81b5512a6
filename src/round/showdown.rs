use crate::Chips;
use crate::cards::strength::Strength;

/// One seat's claim on the pot.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub seat: usize,
    pub strength: Strength,
    pub folded: bool,
}

/// Distributes a single pot at the end of a hand.
///
/// Seats are all-in for the same effective amount under table-stakes
/// buyins, so one pot covers everyone. The best unfolded strength takes
/// it, equal strengths split it evenly, and any odd chips go one each
/// to the earliest tied seats clockwise from the button.
#[derive(Debug, Clone)]
pub struct Showdown {
    pot: Chips,
    button: usize,
    entries: Vec<Entry>,
}

impl From<(Chips, usize, Vec<Entry>)> for Showdown {
    fn from((pot, button, entries): (Chips, usize, Vec<Entry>)) -> Self {
        assert!(!entries.is_empty());
        Self { pot, button, entries }
    }
}

impl Showdown {
    /// Seats holding the best live strength.
    pub fn winners(&self) -> Vec<usize> {
        let best = self
            .entries
            .iter()
            .filter(|e| !e.folded)
            .map(|e| e.strength)
            .max()
            .expect("at least one live seat");
        self.entries
            .iter()
            .filter(|e| !e.folded && e.strength == best)
            .map(|e| e.seat)
            .collect()
    }

    /// Pays the pot out by strength. Rewards are indexed by seat.
    pub fn settle(&self) -> Vec<Chips> {
        self.divide(self.winners())
    }

    /// Pays the pot out evenly across live seats, for hands torn down
    /// before any strength comparison makes sense.
    pub fn split(&self) -> Vec<Chips> {
        let live = self
            .entries
            .iter()
            .filter(|e| !e.folded)
            .map(|e| e.seat)
            .collect::<Vec<usize>>();
        self.divide(live)
    }

    fn divide(&self, mut winners: Vec<usize>) -> Vec<Chips> {
        assert!(!winners.is_empty());
        let n = self.entries.len();
        let share = self.pot / winners.len() as Chips;
        let odd = self.pot % winners.len() as Chips;
        winners.sort_by_key(|seat| (seat + n - self.button - 1) % n);
        let mut rewards = vec![0; n];
        for (i, seat) in winners.iter().enumerate() {
            rewards[*seat] = share + if (i as Chips) < odd { 1 } else { 0 };
        }
        assert!(rewards.iter().sum::<Chips>() == self.pot);
        rewards
    }
}
