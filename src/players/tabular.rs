use super::player::Player;
use crate::error::Error;
use crate::round::choice::Choice;
use crate::round::round::Round;
use crate::strategy::holding::Holding;
use crate::strategy::sheet::Sheet;
use crate::strategy::spot::Spot;
use rand::RngCore;
use std::sync::Arc;

/// A seat that plays straight off a strategy sheet.
///
/// Projects the round down to a spot, looks up the matrix for its own
/// holding, and samples the mixed strategy. Every seat at a table can
/// share one sheet.
#[derive(Debug, Clone)]
pub struct Tabular {
    sheet: Arc<Sheet>,
}

impl Tabular {
    pub fn new(sheet: Arc<Sheet>) -> Self {
        Self { sheet }
    }
}

impl Player for Tabular {
    fn decide(&mut self, round: &Round, rng: &mut dyn RngCore) -> Result<Choice, Error> {
        let spot = Spot::from(round);
        let holding = Holding::from(round.seat(round.actor()).cards());
        let policy = self.sheet.policy(&spot, &holding)?;
        let choice = policy.sample(rng);
        log::trace!("{} holding {} picks {}", spot, holding, choice);
        Ok(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;
    use crate::cards::hole::Hole;
    use crate::table::rotation::Rotation;
    use crate::table::rules::Rules;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn decisions_come_from_the_menu() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let sheet = Arc::new(Sheet::random(rng));
        let mut player = Tabular::new(sheet);
        let mut deck = Deck::new(rng);
        let mut round = Round::new(Rules::default(), Rotation::new(6), vec![200; 6]);
        round.begin((0..6).map(|_| deck.hole().unwrap()).collect::<Vec<Hole>>());
        for _ in 0..20 {
            if !round.turn().is_choice() {
                break;
            }
            let choice = player.decide(&round, rng).unwrap();
            assert!(round.legal().contains(&choice));
            round.submit(choice);
        }
    }
}
