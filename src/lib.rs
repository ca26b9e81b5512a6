pub mod cards;
pub mod error;
pub mod players;
pub mod round;
pub mod strategy;
pub mod table;

/// A unit of account for blinds, stacks, and pots.
///
/// One chip is half a big blind, which keeps the small blind integral.
/// A 100bb buyin is 200 chips, so a full 6-max pot fits comfortably
/// in 16 bits.
pub type Chips = i16;

/// Probability type for mixed strategies.
///
/// Strategy cells must stay normalized under repeated slicing and
/// summing, so they get full doubles even though sampling alone could
/// live with less.
pub type Probability = f64;

pub use error::Error;
