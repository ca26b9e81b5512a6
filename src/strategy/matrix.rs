use super::holding::Holding;
use super::policy::Policy;
use crate::Probability;
use crate::round::choice::Choice;
use serde::Deserialize;
use serde::Serialize;

/// The stored strategy behind one spot.
///
/// Preflop the hole cards drive the decision, so each of the 169
/// holding classes carries its own row of weights, flattened row-major
/// with the menu length as stride. Postflop the abstraction drops the
/// hole cards entirely and a single shared row covers the whole range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Matrix {
    Grid {
        menu: Vec<Choice>,
        weights: Box<[Probability]>,
    },
    Single {
        menu: Vec<Choice>,
        weights: Box<[Probability]>,
    },
}

impl Matrix {
    /// A fresh 169-row grid of random mixed strategies.
    pub fn grid<R: rand::Rng + ?Sized>(menu: &[Choice], rng: &mut R) -> Self {
        Self::Grid {
            menu: menu.to_vec(),
            weights: (0..Holding::COUNT)
                .flat_map(|_| distribution(menu.len(), rng))
                .collect(),
        }
    }
    /// A fresh shared row of random weights.
    pub fn single<R: rand::Rng + ?Sized>(menu: &[Choice], rng: &mut R) -> Self {
        Self::Single {
            menu: menu.to_vec(),
            weights: distribution(menu.len(), rng).into(),
        }
    }

    pub fn menu(&self) -> &[Choice] {
        match self {
            Self::Grid { menu, .. } | Self::Single { menu, .. } => menu,
        }
    }

    /// The mixed strategy this matrix assigns to a holding.
    pub fn policy(&self, holding: &Holding) -> Policy {
        match self {
            Self::Grid { menu, weights } => {
                let stride = menu.len();
                let row = holding.index() * stride;
                Policy::new(menu.clone(), weights[row..row + stride].to_vec())
            }
            Self::Single { menu, weights } => Policy::new(menu.clone(), weights.to_vec()),
        }
    }

    /// Whether every row is a full distribution over the menu. Grids
    /// must carry all 169 rows.
    pub fn is_normalized(&self) -> bool {
        let stride = self.menu().len();
        let (weights, rows) = match self {
            Self::Grid { weights, .. } => (weights, Holding::COUNT),
            Self::Single { weights, .. } => (weights, 1),
        };
        stride > 0
            && weights.len() == stride * rows
            && weights.chunks(stride).all(|row| {
                row.iter().all(|w| *w >= 0.)
                    && (row.iter().sum::<Probability>() - 1.).abs() < Policy::TOLERANCE
            })
    }
}

/// Uniformly random weights normalized to sum to one.
fn distribution<R: rand::Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Probability> {
    let raw = (0..n)
        .map(|_| rng.random::<Probability>())
        .collect::<Vec<Probability>>();
    let sum = raw.iter().sum::<Probability>();
    match sum > 0. {
        true => raw.into_iter().map(|w| w / sum).collect(),
        false => vec![1. / n as Probability; n],
    }
}
