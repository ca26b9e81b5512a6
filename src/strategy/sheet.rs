use super::bucket::Bucket;
use super::context::Context;
use super::holding::Holding;
use super::matrix::Matrix;
use super::policy::Policy;
use super::spot::Spot;
use crate::cards::street::Street;
use crate::error::Error;
use crate::round::level::Level;
use crate::table::role::Role;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// The complete book of strategies a table plays from.
///
/// Holds one matrix for every spot a 6-max hand can reach, so a lookup
/// that misses is a bug in whoever built the sheet, not in the caller.
/// Sheets are immutable once built and cheap to share behind an Arc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(Spot, Matrix)>", into = "Vec<(Spot, Matrix)>")]
pub struct Sheet {
    spots: BTreeMap<Spot, Matrix>,
}

impl Sheet {
    /// A sheet filled with random mixed strategies, covering the whole
    /// key space. Lets tables run before any real strategy exists.
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            spots: Self::spots()
                .into_iter()
                .map(|spot| {
                    let matrix = match spot.street() {
                        Street::Preflop => Matrix::grid(spot.menu(), rng),
                        _ => Matrix::single(spot.menu(), rng),
                    };
                    (spot, matrix)
                })
                .collect(),
        }
    }

    /// Validates and adopts an externally built sheet. Every reachable
    /// spot must appear with a matrix of the right shape for its
    /// street, over the spot's own menu, with normalized rows. The
    /// first spot that breaks any of this comes back as the error.
    pub fn load(spots: Vec<(Spot, Matrix)>) -> Result<Self, Error> {
        let sheet = Self::from(spots);
        for spot in Self::spots() {
            let matrix = sheet
                .spots
                .get(&spot)
                .ok_or(Error::UnknownSituation(spot))?;
            let shaped = match spot.street() {
                Street::Preflop => matches!(matrix, Matrix::Grid { .. }),
                _ => matches!(matrix, Matrix::Single { .. }),
            };
            if !shaped || matrix.menu() != spot.menu() || !matrix.is_normalized() {
                return Err(Error::UnknownSituation(spot));
            }
        }
        Ok(sheet)
    }

    /// The mixed strategy for a seat holding the given cards in the
    /// given spot.
    pub fn policy(&self, spot: &Spot, holding: &Holding) -> Result<Policy, Error> {
        self.spots
            .get(spot)
            .map(|matrix| matrix.policy(holding))
            .ok_or(Error::UnknownSituation(*spot))
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Every spot a 6-max hand can reach.
    ///
    /// Preflop, open spots key on the actor alone; raised spots walk
    /// ordered raiser pairs because limp-reraise lines make both
    /// directions reachable; reraised spots walk the last two raisers
    /// and every actor left of the last one. Postflop all eight shapes
    /// appear at every level. Each keyed spot fans out across its
    /// street and level's bucket window.
    pub fn spots() -> Vec<Spot> {
        let mut spots = Vec::new();
        let roles = Role::all();
        for actor in roles.iter().copied() {
            spots.push(Spot::new(
                Street::Preflop,
                Level::Open,
                Context::Opening { actor },
                None,
            ));
        }
        for raiser in roles.iter().copied() {
            for actor in roles.iter().copied().filter(|a| *a != raiser) {
                for rung in Bucket::window(Street::Preflop, Level::TwoBet)
                    .into_iter()
                    .flatten()
                {
                    spots.push(Spot::new(
                        Street::Preflop,
                        Level::TwoBet,
                        Context::Facing { raiser, actor },
                        Some(Bucket::from(rung)),
                    ));
                }
            }
        }
        for level in [Level::ThreeBet, Level::FourBet, Level::FiveBet] {
            for raiser in roles.iter().copied() {
                for reraiser in roles.iter().copied().filter(|r| *r != raiser) {
                    for actor in roles.iter().copied().filter(|a| *a != reraiser) {
                        for rung in Bucket::window(Street::Preflop, level)
                            .into_iter()
                            .flatten()
                        {
                            spots.push(Spot::new(
                                Street::Preflop,
                                level,
                                Context::Squeezed { raiser, reraiser, actor },
                                Some(Bucket::from(rung)),
                            ));
                        }
                    }
                }
            }
        }
        for street in [Street::Flop, Street::Turn, Street::River] {
            for level in Level::all().iter().copied() {
                for multiway in [false, true] {
                    for in_position in [false, true] {
                        for aggressor in [false, true] {
                            for rung in Bucket::window(street, level).into_iter().flatten() {
                                spots.push(Spot::new(
                                    street,
                                    level,
                                    Context::Postflop { multiway, in_position, aggressor },
                                    Some(Bucket::from(rung)),
                                ));
                            }
                        }
                    }
                }
            }
        }
        spots
    }
}

impl From<Vec<(Spot, Matrix)>> for Sheet {
    fn from(spots: Vec<(Spot, Matrix)>) -> Self {
        Self {
            spots: spots.into_iter().collect(),
        }
    }
}
impl From<Sheet> for Vec<(Spot, Matrix)> {
    fn from(sheet: Sheet) -> Self {
        sheet.spots.into_iter().collect()
    }
}
