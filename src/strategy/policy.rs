use crate::Probability;
use crate::round::choice::Choice;
use serde::Deserialize;
use serde::Serialize;

/// A mixed strategy over one betting menu.
///
/// Weights are aligned index-for-index with choices, nonnegative, and
/// sum to one. Construction checks all three so a sheet full of junk
/// fails loudly at the first lookup rather than skewing results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    choices: Vec<Choice>,
    weights: Vec<Probability>,
}

impl Policy {
    pub const TOLERANCE: Probability = 1e-9;

    pub fn new(choices: Vec<Choice>, weights: Vec<Probability>) -> Self {
        assert!(!choices.is_empty());
        assert!(choices.len() == weights.len());
        assert!(weights.iter().all(|w| *w >= 0.));
        assert!((weights.iter().sum::<Probability>() - 1.).abs() < Self::TOLERANCE);
        Self { choices, weights }
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }
    pub fn weights(&self) -> &[Probability] {
        &self.weights
    }
    /// Probability assigned to the given choice, zero if absent.
    pub fn weight(&self, choice: &Choice) -> Probability {
        self.choices
            .iter()
            .zip(self.weights.iter())
            .find(|(c, _)| *c == choice)
            .map(|(_, w)| *w)
            .unwrap_or(0.)
    }

    /// Draws one choice in proportion to its weight. A choice carrying
    /// zero weight is never drawn.
    pub fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Choice {
        use rand::distr::Distribution;
        use rand::distr::weighted::WeightedIndex;
        let distribution = WeightedIndex::new(&self.weights).expect("weights are normalized");
        self.choices[distribution.sample(rng)]
    }
}
