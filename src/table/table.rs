use super::rules::Rules;
use crate::cards::deck::Deck;
use crate::cards::hole::Hole;
use crate::error::Error;
use crate::players::player::Player;
use crate::round::result::HandResult;
use crate::round::round::Round;
use crate::round::turn::Turn;
use crate::table::rotation::Rotation;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// One live game: a round, its deck source, and the deciders.
///
/// Runs the turn loop the round exposes. Terminal settles the hand,
/// chance turns draw from a deck shuffled fresh every hand, and choice
/// turns go out to the seated player. A player that cannot decide
/// abandons the hand rather than poisoning it, and play still returns
/// a settled result.
#[derive(Debug)]
pub struct Table {
    round: Round,
    players: Vec<Box<dyn Player>>,
    rng: SmallRng,
}

impl Table {
    pub fn new(rules: Rules, players: Vec<Box<dyn Player>>) -> Self {
        Self::seeded(rules, players, rand::rng().random::<u64>())
    }

    pub fn seeded(rules: Rules, players: Vec<Box<dyn Player>>, seed: u64) -> Self {
        let n = players.len();
        assert!((2..=6).contains(&n));
        Self {
            round: Round::new(rules, Rotation::new(n), vec![rules.buyin; n]),
            players,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Moves the button before the next hand.
    pub fn rotate(&mut self) {
        self.round.rotate();
    }

    /// Plays one complete hand and settles it.
    pub fn play(&mut self) -> Result<HandResult, Error> {
        self.round.refill();
        let mut deck = Deck::new(&mut self.rng);
        let holes = (0..self.round.n())
            .map(|_| deck.hole())
            .collect::<Result<Vec<Hole>, Error>>()?;
        self.round.begin(holes);
        loop {
            match self.round.turn() {
                Turn::Terminal(_) => break Ok(self.round.settle()),
                Turn::Chance(street) => {
                    let cards = deck.reveal(street)?;
                    self.round.reveal(cards);
                }
                Turn::Choice(seat) => {
                    match self.players[seat].decide(&self.round, &mut self.rng) {
                        Ok(choice) => {
                            self.round.submit(choice);
                        }
                        Err(error) => {
                            log::error!("seat {} cannot decide, abandoning hand: {}", seat, error);
                            self.round.abandon();
                        }
                    }
                }
            }
        }
    }
}
