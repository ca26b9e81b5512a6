use crate::Chips;
use crate::cards::hole::Hole;
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Betting,
    Shoving,
    Folding,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Betting => write!(f, "{}", "B".green()),
            State::Shoving => write!(f, "{}", "S".yellow()),
            State::Folding => write!(f, "{}", "F".red()),
        }
    }
}

/// One chair at the table.
///
/// Tracks the hand-local betting state (this street's stake, this
/// hand's spent total, whether the seat still owes a decision) along
/// with the session-long stack and net result.
#[derive(Debug, Clone, Copy)]
pub struct Seat {
    cards: Hole,
    stack: Chips,
    stake: Chips,
    spent: Chips,
    state: State,
    acted: bool,
    score: Chips,
}

impl Seat {
    pub fn new(stack: Chips) -> Seat {
        Seat {
            stack,
            stake: 0,
            spent: 0,
            state: State::Betting,
            acted: false,
            cards: Hole::empty(),
            score: 0,
        }
    }

    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn stake(&self) -> Chips {
        self.stake
    }
    pub fn spent(&self) -> Chips {
        self.spent
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn acted(&self) -> bool {
        self.acted
    }
    pub fn cards(&self) -> Hole {
        self.cards
    }
    /// Session net, wins minus losses across all hands.
    pub fn score(&self) -> Chips {
        self.score
    }

    pub fn bet(&mut self, bet: Chips) {
        assert!(bet <= self.stack);
        self.stack -= bet;
        self.stake += bet;
        self.spent += bet;
    }
    pub fn win(&mut self, reward: Chips) {
        self.stack += reward;
        self.score += reward;
    }
    pub fn lose(&mut self) {
        self.score -= self.spent;
    }
    pub fn touch(&mut self) {
        self.acted = true;
    }
    pub fn untouch(&mut self) {
        self.acted = false;
    }
    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }
    pub fn set_cards(&mut self, cards: Hole) {
        self.cards = cards;
    }
    /// Restock a busted seat between hands.
    pub fn rebuy(&mut self, stack: Chips) {
        assert!(self.stack == 0);
        self.stack = stack;
    }

    /// New street: stakes come back to zero and everyone owes an action.
    pub fn next_street(&mut self) {
        self.stake = 0;
        self.acted = false;
    }
    /// New hand: fresh cards, fresh state, nothing spent.
    pub fn next_hand(&mut self) {
        self.cards = Hole::empty();
        self.stake = 0;
        self.spent = 0;
        self.acted = false;
        self.state = State::Betting;
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            format!("{:>4}", self.stack).green(),
            self.cards,
            self.state,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn betting_moves_chips() {
        let mut seat = Seat::new(200);
        seat.bet(6);
        assert!(seat.stack() == 194);
        assert!(seat.stake() == 6);
        assert!(seat.spent() == 6);
        seat.next_street();
        seat.bet(10);
        assert!(seat.stake() == 10);
        assert!(seat.spent() == 16);
    }

    #[test]
    fn score_tracks_session_net() {
        let mut seat = Seat::new(200);
        seat.bet(50);
        seat.lose();
        seat.win(120);
        assert!(seat.score() == 120 - 50);
        assert!(seat.stack() == 200 - 50 + 120);
    }
}
