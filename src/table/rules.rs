use crate::Chips;
use serde::Deserialize;
use serde::Serialize;

/// Table stakes, in chips of half a big blind.
///
/// Defaults follow the house game: 0.5bb/1bb blinds and a 100bb buyin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    pub sblind: Chips,
    pub bblind: Chips,
    pub buyin: Chips,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            sblind: 1,
            bblind: 2,
            buyin: 200,
        }
    }
}

impl Rules {
    /// Chip cost of a bet quoted in big blinds.
    pub fn chips(&self, bb: Chips) -> Chips {
        bb * self.bblind
    }
    /// Pot size in big blinds, rounded up to the next whole blind.
    pub fn blinds(&self, chips: Chips) -> Chips {
        (chips + self.bblind - 1) / self.bblind
    }
}
