use super::action::Action;
use super::choice::Choice;
use super::level::Level;
use super::result::HandResult;
use super::result::Over;
use super::result::Show;
use super::showdown::Entry;
use super::showdown::Showdown;
use super::turn::Turn;
use crate::Chips;
use crate::cards::board::Board;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::cards::strength::Strength;
use crate::error::Error;
use crate::table::role::Role;
use crate::table::rotation::Rotation;
use crate::table::rules::Rules;
use crate::table::seat::Seat;
use crate::table::seat::State;

/// The state of one hand between actions.
///
/// Owns the seats, the pot, the board, and the bookkeeping that decides
/// whose move it is. Immutable methods spell out the rules of what may
/// happen next; `submit` and `reveal` are the only doors through which
/// the hand advances. Cards come from outside, so this type never
/// touches a deck or an rng.
#[derive(Debug, Clone)]
pub struct Round {
    rules: Rules,
    rotation: Rotation,
    seats: Vec<Seat>,
    board: Board,
    pot: Chips,
    level: Level,
    actor: usize,
    raisers: Vec<usize>,
    pfr: Option<usize>,
    over: Option<Over>,
    history: Vec<Action>,
    settled: bool,
}

impl Round {
    pub fn new(rules: Rules, rotation: Rotation, stacks: Vec<Chips>) -> Self {
        assert!(stacks.len() == rotation.n());
        Self {
            rules,
            rotation,
            seats: stacks.into_iter().map(Seat::new).collect(),
            board: Board::empty(),
            pot: 0,
            level: Level::Open,
            actor: 0,
            raisers: Vec::new(),
            pfr: None,
            over: None,
            history: Vec::new(),
            settled: false,
        }
    }

    /// Starts a fresh hand: deals the given holes, posts both blinds,
    /// and hands the action to the first seat behind the big blind.
    pub fn begin(&mut self, holes: Vec<Hole>) {
        assert!(holes.len() == self.n());
        assert!(self.seats.iter().all(|s| s.stack() > 0), "busted seat");
        self.board.clear();
        self.pot = 0;
        self.level = Level::Open;
        self.raisers.clear();
        self.pfr = None;
        self.over = None;
        self.history.clear();
        self.settled = false;
        for (seat, hole) in self.seats.iter_mut().zip(holes) {
            seat.next_hand();
            seat.set_cards(hole);
        }
        let sb = self.rotation.seat_of(Role::SmallBlind).expect("blinds always seated");
        let bb = self.rotation.seat_of(Role::BigBlind).expect("blinds always seated");
        self.post(sb, self.rules.sblind);
        self.post(bb, self.rules.bblind);
        self.actor = self.rotation.next_active(bb, &self.betting()).unwrap_or(bb);
    }

    pub fn n(&self) -> usize {
        self.seats.len()
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn board(&self) -> Board {
        self.board
    }
    pub fn street(&self) -> Street {
        self.board.street()
    }
    pub fn level(&self) -> Level {
        self.level
    }
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }
    pub fn actor(&self) -> usize {
        self.actor
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, seat: usize) -> &Seat {
        &self.seats[seat]
    }
    pub fn history(&self) -> &[Action] {
        &self.history
    }
    /// Raiser roles this street, in raise order.
    pub fn aggression(&self) -> Vec<Role> {
        self.raisers
            .iter()
            .map(|seat| self.rotation.role_of(*seat))
            .collect()
    }
    /// The preflop aggressor, fixed once the flop comes down.
    pub fn opener(&self) -> Option<usize> {
        self.pfr
    }
    /// Seats still contesting the pot.
    pub fn live(&self) -> Vec<usize> {
        (0..self.n())
            .filter(|i| self.seats[*i].state() != State::Folding)
            .collect()
    }
    /// True when no live seat acts after this one on the current street.
    pub fn in_position(&self, seat: usize) -> bool {
        let key = |s: usize| (s + self.n() - self.rotation.button() - 1) % self.n();
        self.live().into_iter().all(|other| key(other) <= key(seat))
    }

    /// Moves the button for the next hand. Only sane between hands.
    pub fn rotate(&mut self) {
        self.rotation.advance();
    }

    /// Restocks busted seats to the table buyin.
    pub fn refill(&mut self) {
        for (i, seat) in self.seats.iter_mut().enumerate() {
            if seat.stack() == 0 {
                seat.rebuy(self.rules.buyin);
                log::debug!("seat {} rebuys for {}", i, self.rules.buyin);
            }
        }
    }

    pub fn turn(&self) -> Turn {
        if let Some(over) = self.over {
            Turn::Terminal(over)
        } else if self.is_everyone_folding() {
            Turn::Terminal(Over::FoldOut)
        } else if self.is_everyone_alright() {
            if self.street() == Street::River {
                Turn::Terminal(Over::Showdown)
            } else {
                Turn::Chance(self.street())
            }
        } else {
            Turn::Choice(self.actor)
        }
    }

    /// The menu the acting seat may pick from right now. Every entry
    /// is playable: a raise a short stack cannot cover just goes in as
    /// an all-in for less.
    pub fn legal(&self) -> Vec<Choice> {
        assert!(self.turn().is_choice());
        self.level.menu(self.street()).to_vec()
    }

    /// Resolves a pick into a concrete action and applies it.
    ///
    /// A pick outside the legal menu is a policy violation: it is
    /// logged and the seat is folded, never silently accepted.
    pub fn submit(&mut self, choice: Choice) -> Action {
        assert!(self.turn() == Turn::Choice(self.actor));
        let action = if self.legal().contains(&choice) {
            self.realize(choice)
        } else {
            log::warn!("seat {}: {}", self.actor, Error::IllegalAction(choice));
            Action::Fold
        };
        self.apply(action);
        action
    }

    /// Applies the community cards that open the next street.
    pub fn reveal(&mut self, cards: Hand) {
        assert!(self.turn() == Turn::Chance(self.street()));
        assert!(cards.size() == self.street().n_revealed());
        if self.street() == Street::Preflop {
            self.pfr = self.raisers.last().copied();
        }
        self.board.add(cards);
        self.level = Level::Open;
        self.raisers.clear();
        for seat in self.seats.iter_mut() {
            seat.next_street();
        }
        if let Ok(first) = self.rotation.next_active(self.rotation.button(), &self.betting()) {
            self.actor = first;
        }
        self.history.push(Action::Draw(cards));
        log::debug!("{} {}", self.street(), self.board);
    }

    /// Tears the hand down at a state boundary. Chips already in the
    /// pot stay there; settlement splits them across live seats.
    pub fn abandon(&mut self) {
        assert!(self.over.is_none());
        assert!(!self.settled);
        self.over = Some(Over::Abandoned);
    }

    /// Pays the pot out and folds the hand's outcome into the seats.
    pub fn settle(&mut self) -> HandResult {
        let over = match self.turn() {
            Turn::Terminal(over) => over,
            _ => panic!("settling a live hand"),
        };
        assert!(!self.settled);
        self.settled = true;
        let entries = self
            .seats
            .iter()
            .enumerate()
            .map(|(seat, s)| Entry {
                seat,
                strength: self.strength(seat),
                folded: s.state() == State::Folding,
            })
            .collect::<Vec<Entry>>();
        let showdown = Showdown::from((self.pot, self.rotation.button(), entries));
        let rewards = match over {
            Over::Abandoned => showdown.split(),
            _ => showdown.settle(),
        };
        for seat in self.seats.iter_mut() {
            seat.lose();
        }
        for (seat, reward) in self.seats.iter_mut().zip(rewards.iter()) {
            seat.win(*reward);
        }
        let winner = rewards
            .iter()
            .enumerate()
            .max_by_key(|(seat, reward)| {
                (**reward, self.n() - (seat + self.n() - self.rotation.button() - 1) % self.n())
            })
            .map(|(seat, _)| seat)
            .expect("at least one seat");
        let shows = match over {
            Over::Showdown => Some(
                self.live()
                    .into_iter()
                    .map(|seat| Show {
                        seat,
                        hole: self.seats[seat].cards(),
                        strength: self.strength(seat),
                    })
                    .collect(),
            ),
            _ => None,
        };
        log::trace!("::::::::::::::");
        for (i, seat) in self.seats.iter().enumerate() {
            log::trace!("{} {} {:>5} {:>+5}", i, seat.state(), seat.stack(), rewards[i] - seat.spent());
        }
        let result = HandResult {
            over,
            winner,
            pot: self.pot,
            board: self.board,
            rewards,
            shows,
        };
        log::info!("{}", result);
        result
    }

    //

    fn strength(&self, seat: usize) -> Strength {
        Strength::from(Hand::add(
            Hand::from(self.seats[seat].cards()),
            Hand::from(self.board),
        ))
    }

    fn post(&mut self, seat: usize, blind: Chips) {
        let blind = blind.min(self.seats[seat].stack());
        self.actor = seat;
        self.pot += blind;
        self.seats[seat].bet(blind);
        if self.seats[seat].stack() == 0 {
            self.seats[seat].set_state(State::Shoving);
        }
        self.history.push(Action::Blind(blind));
        log::trace!("seat {} {}", seat, Action::Blind(blind));
    }

    fn apply(&mut self, action: Action) {
        log::trace!("seat {} {}", self.actor, action);
        self.history.push(action);
        match action {
            Action::Check => {
                self.seats[self.actor].touch();
            }
            Action::Fold => {
                self.seats[self.actor].set_state(State::Folding);
                self.seats[self.actor].touch();
            }
            Action::Call(chips) => {
                self.bet(chips);
                self.seats[self.actor].touch();
            }
            Action::Raise(chips) | Action::Shove(chips) => {
                let prior = self.effective_stake();
                self.bet(chips);
                if self.seats[self.actor].stake() > prior {
                    self.level = self.level.bump();
                    self.raisers.push(self.actor);
                    for seat in self.seats.iter_mut() {
                        seat.untouch();
                    }
                }
                self.seats[self.actor].touch();
            }
            Action::Blind(_) | Action::Draw(_) => unreachable!("not a seat decision"),
        }
        self.next_player();
    }

    fn bet(&mut self, chips: Chips) {
        assert!(chips <= self.seats[self.actor].stack());
        self.pot += chips;
        self.seats[self.actor].bet(chips);
        if self.seats[self.actor].stack() == 0 {
            self.seats[self.actor].set_state(State::Shoving);
        }
    }

    fn next_player(&mut self) {
        if !self.is_everyone_alright() && !self.is_everyone_folding() {
            self.actor = self
                .rotation
                .next_active(self.actor, &self.betting())
                .expect("someone must still act");
        }
    }

    fn realize(&self, choice: Choice) -> Action {
        let stack = self.seats[self.actor].stack();
        match choice {
            Choice::Fold => Action::Fold,
            Choice::Check => {
                assert!(self.to_call() == 0);
                Action::Check
            }
            Choice::Call => match self.to_call() {
                0 => Action::Check,
                call if call >= stack => Action::Shove(stack),
                call => Action::Call(call),
            },
            Choice::RaiseTo(bb) => {
                let target = self.rules.chips(bb);
                self.raise(target - self.seats[self.actor].stake())
            }
            Choice::RaisePot(odds) => self.raise(odds.of(self.pot)),
        }
    }

    /// Clamps a desired raise into the window between the minimum legal
    /// raise and an outright shove.
    fn raise(&self, put: Chips) -> Action {
        let stack = self.seats[self.actor].stack();
        let put = put.max(self.to_raise());
        if put >= stack {
            Action::Shove(stack)
        } else {
            Action::Raise(put)
        }
    }

    //

    /// all players have acted, the pot is right
    fn is_everyone_alright(&self) -> bool {
        self.is_everyone_calling()
            || self.is_everyone_folding()
            || self.is_everyone_shoving()
            || self.is_betting_moot()
    }
    /// all players betting are in for the same amount and have spoken
    fn is_everyone_calling(&self) -> bool {
        self.is_everyone_touched() && self.is_everyone_matched()
    }
    fn is_everyone_touched(&self) -> bool {
        self.seats
            .iter()
            .filter(|s| s.state() == State::Betting)
            .all(|s| s.acted())
    }
    fn is_everyone_matched(&self) -> bool {
        let stake = self.effective_stake();
        self.seats
            .iter()
            .filter(|s| s.state() == State::Betting)
            .all(|s| s.stake() == stake)
    }
    /// all players betting or shoving are shoving
    fn is_everyone_shoving(&self) -> bool {
        self.seats
            .iter()
            .filter(|s| s.state() != State::Folding)
            .all(|s| s.state() == State::Shoving)
    }
    /// there is exactly one player betting or shoving
    fn is_everyone_folding(&self) -> bool {
        self.live().len() == 1
    }
    /// at most one seat can still bet and it owes nothing, so no bet
    /// could ever be called
    fn is_betting_moot(&self) -> bool {
        let betting = self.betting();
        match betting.as_slice() {
            [] => true,
            [lone] => self.seats[*lone].stake() >= self.effective_stake(),
            _ => false,
        }
    }

    //

    pub fn to_call(&self) -> Chips {
        self.effective_stake() - self.seats[self.actor].stake()
    }
    pub fn to_shove(&self) -> Chips {
        self.seats[self.actor].stack()
    }
    /// Minimum chips the actor must put in for a legal raise: match the
    /// table's largest stake, then add at least the last raise margin
    /// or one big blind, whichever is greater.
    pub fn to_raise(&self) -> Chips {
        let (most, next) = self
            .seats
            .iter()
            .filter(|s| s.state() != State::Folding)
            .map(|s| s.stake())
            .fold((0, 0), |(most, next), stake| {
                if stake > most {
                    (stake, most)
                } else if stake > next {
                    (most, stake)
                } else {
                    (most, next)
                }
            });
        let relative = most - self.seats[self.actor].stake();
        let marginal = most - next;
        let required = marginal.max(self.rules.bblind);
        relative + required
    }

    fn effective_stake(&self) -> Chips {
        self.seats
            .iter()
            .map(|s| s.stake())
            .max()
            .expect("non-empty seats")
    }

    fn betting(&self) -> Vec<usize> {
        (0..self.n())
            .filter(|i| self.seats[*i].state() == State::Betting)
            .collect()
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        for seat in self.seats.iter() {
            write!(f, "{}{:<6}", seat.state(), seat.stack())?;
        }
        write!(
            f,
            "{}",
            format!(" @ {:>5} {} {} {}", self.pot, self.street(), self.level, self.board).bright_green()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holes(n: usize) -> Vec<Hole> {
        use crate::cards::deck::Deck;
        use rand::SeedableRng;
        use rand::rngs::SmallRng;
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut deck = Deck::new(rng);
        (0..n).map(|_| deck.hole().unwrap()).collect()
    }

    fn fresh(n: usize) -> Round {
        let mut round = Round::new(Rules::default(), Rotation::new(n), vec![200; n]);
        round.begin(holes(n));
        round
    }

    #[test]
    fn blinds_open_the_pot() {
        let round = fresh(6);
        assert!(round.pot() == 3);
        assert!(round.seat(1).stake() == 1);
        assert!(round.seat(2).stake() == 2);
        assert!(round.turn() == Turn::Choice(3));
        assert!(round.level() == Level::Open);
    }

    #[test]
    fn folds_collapse_to_one_winner() {
        let mut round = fresh(6);
        for _ in 0..5 {
            round.submit(Choice::Fold);
        }
        assert!(round.turn() == Turn::Terminal(Over::FoldOut));
        let result = round.settle();
        assert!(result.over == Over::FoldOut);
        assert!(result.winner == 2);
        assert!(result.rewards[2] == 3);
        assert!(result.shows.is_none());
        assert!(round.seat(2).score() == 3 - 2);
    }

    #[test]
    fn limped_pot_checks_through_to_showdown() {
        use crate::cards::deck::Deck;
        use rand::SeedableRng;
        use rand::rngs::SmallRng;
        let ref mut rng = SmallRng::seed_from_u64(9);
        let mut deck = Deck::new(rng);
        let mut round = Round::new(Rules::default(), Rotation::new(6), vec![200; 6]);
        round.begin((0..6).map(|_| deck.hole().unwrap()).collect());
        for _ in 0..6 {
            round.submit(Choice::Call);
        }
        assert!(round.pot() == 12);
        assert!(round.turn() == Turn::Chance(Street::Preflop));
        for street in [Street::Preflop, Street::Flop, Street::Turn] {
            round.reveal(deck.reveal(street).unwrap());
            for _ in 0..6 {
                round.submit(Choice::Check);
            }
        }
        assert!(round.turn() == Turn::Terminal(Over::Showdown));
        let result = round.settle();
        assert!(result.over == Over::Showdown);
        assert!(result.pot == 12);
        assert!(result.shows.as_ref().unwrap().len() == 6);
        assert!(result.rewards.iter().sum::<Chips>() == 12);
    }

    #[test]
    fn big_blind_gets_the_option() {
        let mut round = fresh(6);
        for _ in 0..5 {
            round.submit(Choice::Call);
        }
        // five limps in, big blind still owes a decision
        assert!(round.turn() == Turn::Choice(2));
        assert!(round.to_call() == 0);
        let action = round.submit(Choice::Call);
        assert!(action == Action::Check);
        assert!(round.turn() == Turn::Chance(Street::Preflop));
    }

    #[test]
    fn raises_escalate_the_level() {
        let mut round = fresh(6);
        round.submit(Choice::RaiseTo(3));
        assert!(round.level() == Level::TwoBet);
        assert!(round.seat(3).stake() == 6);
        round.submit(Choice::Fold);
        round.submit(Choice::RaiseTo(8));
        assert!(round.level() == Level::ThreeBet);
        assert!(round.seat(5).stake() == 16);
        assert!(round.aggression() == vec![Role::Lojack, Role::Cutoff]);
    }

    #[test]
    fn raise_reopens_action() {
        let mut round = fresh(6);
        for _ in 0..5 {
            round.submit(Choice::Call);
        }
        round.submit(Choice::RaiseTo(5));
        // the big blind raised; every limper owes another decision
        assert!(round.level() == Level::TwoBet);
        for _ in 0..5 {
            assert!(round.turn().is_choice());
            round.submit(Choice::Call);
        }
        assert!(round.turn() == Turn::Chance(Street::Preflop));
        assert!(round.pot() == 60);
    }

    #[test]
    fn illegal_choice_is_folded() {
        let mut round = fresh(6);
        // raising by pot fraction is a postflop menu, not a preflop one
        let action = round.submit(Choice::RaisePot(crate::round::odds::Odds(1, 2)));
        assert!(action == Action::Fold);
        assert!(round.seat(3).state() == State::Folding);
    }

    #[test]
    fn check_facing_a_bet_is_folded() {
        let mut round = fresh(6);
        round.submit(Choice::RaiseTo(3));
        let action = round.submit(Choice::Check);
        assert!(action == Action::Fold);
    }

    #[test]
    fn short_call_becomes_a_shove() {
        let mut round = Round::new(Rules::default(), Rotation::new(3), vec![200, 200, 10]);
        round.begin(holes(3));
        // seat 0 is the button and opens huge; seat 2 in the big blind
        // can only get its last chips in
        round.submit(Choice::RaiseTo(8));
        round.submit(Choice::Fold);
        assert!(round.turn() == Turn::Choice(2));
        let action = round.submit(Choice::Call);
        assert!(action == Action::Shove(8));
        assert!(round.seat(2).state() == State::Shoving);
    }

    #[test]
    fn all_in_hands_run_out_the_board() {
        let mut round = Round::new(Rules::default(), Rotation::new(2), vec![40, 40]);
        round.begin(holes(2));
        round.submit(Choice::RaiseTo(8));
        assert!(round.turn() == Turn::Choice(1));
        // raising to 34bb is more than the 20bb stack, so it goes in whole
        let action = round.submit(Choice::RaiseTo(34));
        assert!(action == Action::Shove(38));
        let action = round.submit(Choice::Call);
        assert!(action == Action::Shove(24));
        assert!(round.turn() == Turn::Chance(Street::Preflop));
        round.reveal(Hand::try_from("2c 7d Jh").unwrap());
        assert!(round.turn() == Turn::Chance(Street::Flop));
        round.reveal(Hand::try_from("As").unwrap());
        assert!(round.turn() == Turn::Chance(Street::Turn));
        round.reveal(Hand::try_from("Kd").unwrap());
        assert!(round.turn() == Turn::Terminal(Over::Showdown));
        assert!(round.pot() == 80);
    }

    #[test]
    fn fivebet_forces_resolution() {
        let mut round = fresh(2);
        round.submit(Choice::RaiseTo(3));
        round.submit(Choice::RaiseTo(8));
        round.submit(Choice::RaiseTo(21));
        round.submit(Choice::RaiseTo(55));
        assert!(round.level() == Level::FiveBet);
        let legal = round.legal();
        assert!(legal == vec![Choice::Fold, Choice::Call]);
    }

    #[test]
    fn abandoned_hand_splits_the_pot() {
        let mut round = fresh(6);
        round.submit(Choice::RaiseTo(3));
        round.submit(Choice::Fold);
        round.abandon();
        assert!(round.turn() == Turn::Terminal(Over::Abandoned));
        let result = round.settle();
        assert!(result.over == Over::Abandoned);
        assert!(result.rewards[4] == 0);
        assert!(result.rewards.iter().sum::<Chips>() == result.pot);
    }

    #[test]
    fn postflop_first_to_act_is_left_of_button() {
        let mut round = fresh(6);
        for _ in 0..6 {
            round.submit(Choice::Call);
        }
        round.reveal(Hand::try_from("2c 7d Jh").unwrap());
        assert!(round.turn() == Turn::Choice(1));
        assert!(round.level() == Level::Open);
    }

    #[test]
    fn heads_up_button_acts_first_preflop() {
        let round = fresh(2);
        // seat 0 holds the button and posts the small blind heads up
        assert!(round.seat(0).stake() == 1);
        assert!(round.seat(1).stake() == 2);
        assert!(round.turn() == Turn::Choice(0));
    }

    #[test]
    fn chips_are_conserved() {
        let mut round = fresh(6);
        round.submit(Choice::RaiseTo(5));
        round.submit(Choice::Fold);
        round.submit(Choice::RaiseTo(21));
        round.submit(Choice::Fold);
        round.submit(Choice::Fold);
        round.submit(Choice::Fold);
        round.submit(Choice::Call);
        let pot = round.pot();
        let stacks = round.seats().iter().map(|s| s.stack()).sum::<Chips>();
        assert!(pot + stacks == 6 * 200);
    }
}
