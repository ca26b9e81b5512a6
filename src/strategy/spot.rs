use super::bucket::Bucket;
use super::context::Context;
use crate::cards::street::Street;
use crate::round::choice::Choice;
use crate::round::level::Level;
use crate::round::round::Round;
use serde::Deserialize;
use serde::Serialize;

/// Everything a strategy table keys on, hole cards aside.
///
/// A live hand projects down to a Spot whenever a seat owes a decision,
/// and the sheet is built so that every projection of a reachable state
/// has an entry. The menu is a function of the key, not stored with it.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Spot {
    street: Street,
    level: Level,
    context: Context,
    bucket: Option<Bucket>,
}

impl Spot {
    pub fn new(street: Street, level: Level, context: Context, bucket: Option<Bucket>) -> Self {
        assert!(bucket.is_some() != matches!((street, level), (Street::Preflop, Level::Open)));
        Self {
            street,
            level,
            context,
            bucket,
        }
    }

    pub fn street(&self) -> Street {
        self.street
    }
    pub fn level(&self) -> Level {
        self.level
    }
    pub fn context(&self) -> Context {
        self.context
    }
    pub fn bucket(&self) -> Option<Bucket> {
        self.bucket
    }
    pub fn menu(&self) -> &'static [Choice] {
        self.level.menu(self.street)
    }
}

impl From<&Round> for Spot {
    fn from(round: &Round) -> Self {
        let street = round.street();
        let level = round.level();
        let actor = round.rotation().role_of(round.actor());
        let context = match street {
            Street::Preflop => match round.aggression().as_slice() {
                [] => Context::Opening { actor },
                [raiser] => Context::Facing {
                    raiser: *raiser,
                    actor,
                },
                [.., raiser, reraiser] => Context::Squeezed {
                    raiser: *raiser,
                    reraiser: *reraiser,
                    actor,
                },
            },
            _ => Context::Postflop {
                multiway: round.live().len() > 2,
                in_position: round.in_position(round.actor()),
                aggressor: round.opener() == Some(round.actor()),
            },
        };
        let bucket = Bucket::window(street, level)
            .map(|window| Bucket::nearest(round.rules().blinds(round.pot()), window));
        Self::new(street, level, context, bucket)
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.bucket {
            Some(bucket) => write!(f, "{} {} {} {}", self.street, self.level, self.context, bucket),
            None => write!(f, "{} {} {}", self.street, self.level, self.context),
        }
    }
}
