use super::rank::Rank;
use serde::Deserialize;
use serde::Serialize;

/// A hand's kicker cards, as a 13-bit rank set.
///
/// Suits never matter for kickers, so ranks are enough. The derived Ord
/// compares the raw bits, which agrees with comparing kicker lists
/// lexicographically from the top.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Kickers(u32);

/// u32 isomorphism
impl From<Kickers> for u32 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u32> for Kickers {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

/// Vec<Rank> isomorphism
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        let mut value = k.0;
        let mut index = 0u8;
        let mut ranks = Vec::new();
        while value > 0 {
            if value & 1 == 1 {
                ranks.push(Rank::from(index));
            }
            value = value >> 1;
            index = index + 1;
        }
        ranks
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u32::from(u16::from(*r))).fold(0u32, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}
