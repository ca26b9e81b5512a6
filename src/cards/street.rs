use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Street {
    Preflop = 0,
    Flop = 1,
    Turn = 2,
    River = 3,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Preflop, Self::Flop, Self::Turn, Self::River]
    }
    pub const fn next(&self) -> Self {
        match self {
            Self::Preflop => Self::Flop,
            Self::Flop => Self::Turn,
            Self::Turn => Self::River,
            Self::River => panic!("terminal"),
        }
    }
    /// how many board cards are visible on this street
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Preflop => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::River => 5,
        }
    }
    /// how many cards the dealer burns and turns to leave this street
    pub const fn n_revealed(&self) -> usize {
        match self {
            Self::Preflop => 3,
            Self::Flop => 1,
            Self::Turn => 1,
            Self::River => panic!("terminal"),
        }
    }
}

/// board size isomorphism
impl From<usize> for Street {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Preflop,
            3 => Self::Flop,
            4 => Self::Turn,
            5 => Self::River,
            _ => panic!("no street shows {} cards", n),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Preflop => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::River => write!(f, "river"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_progression() {
        assert!(Street::Preflop.next() == Street::Flop);
        assert!(Street::Flop.next() == Street::Turn);
        assert!(Street::Turn.next() == Street::River);
    }

    #[test]
    fn reveals_sum_to_board() {
        let dealt = Street::Preflop.n_revealed() + Street::Flop.n_revealed() + Street::Turn.n_revealed();
        assert!(dealt == Street::River.n_observed());
    }
}
