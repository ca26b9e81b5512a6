use serde::Deserialize;
use serde::Serialize;

/// A seat's positional role relative to the button.
///
/// Roles are what strategy reasons about. Seats are physical and fixed
/// while roles rotate with the button every hand. Preflop action order
/// is exactly the declaration order, lojack first and big blind last.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Lojack = 0,
    Hijack = 1,
    Cutoff = 2,
    Button = 3,
    SmallBlind = 4,
    BigBlind = 5,
}

impl Role {
    pub const fn all() -> &'static [Self] {
        &[
            Self::Lojack,
            Self::Hijack,
            Self::Cutoff,
            Self::Button,
            Self::SmallBlind,
            Self::BigBlind,
        ]
    }

    /// The roles in play at a table of n seats, in preflop action order.
    ///
    /// Short tables drop the earliest roles first. Heads up keeps only
    /// the blinds, and the button seat doubles as the small blind.
    pub fn ring(n: usize) -> &'static [Self] {
        assert!(n >= 2);
        assert!(n <= 6);
        &Self::all()[6 - n..]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Lojack => write!(f, "LJ"),
            Self::Hijack => write!(f, "HJ"),
            Self::Cutoff => write!(f, "CO"),
            Self::Button => write!(f, "BTN"),
            Self::SmallBlind => write!(f, "SB"),
            Self::BigBlind => write!(f, "BB"),
        }
    }
}
