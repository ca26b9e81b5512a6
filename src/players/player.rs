use crate::error::Error;
use crate::round::choice::Choice;
use crate::round::round::Round;
use rand::RngCore;

/// Anything that makes betting decisions for a seat.
///
/// Implementations read whatever they need off the round, which always
/// points its actor at the seat being asked. Randomness is threaded in
/// so a table full of players replays exactly from one seed.
pub trait Player: std::fmt::Debug {
    fn decide(&mut self, round: &Round, rng: &mut dyn RngCore) -> Result<Choice, Error>;
}
