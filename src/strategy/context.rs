use crate::table::role::Role;
use serde::Deserialize;
use serde::Serialize;

/// Who is involved in the decision, as coarsely as strategy cares.
///
/// Preflop the exact roles matter, but only up to the last two raisers:
/// a cold 4-bet spot and a back-and-forth 4-bet spot key identically
/// when the same two roles put in the last two raises. Postflop the
/// roles wash out entirely and only the shape of the pot survives.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Context {
    /// Nobody has raised yet; the actor may open the pot.
    Opening { actor: Role },
    /// One raise stands and the actor faces its owner.
    Facing { raiser: Role, actor: Role },
    /// Two or more raises stand; only the last two count.
    Squeezed { raiser: Role, reraiser: Role, actor: Role },
    /// Postflop shape: field size, relative position, initiative.
    Postflop { multiway: bool, in_position: bool, aggressor: bool },
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Opening { actor } => write!(f, "{} opens", actor),
            Self::Facing { raiser, actor } => write!(f, "{} vs {}", actor, raiser),
            Self::Squeezed { raiser, reraiser, actor } => {
                write!(f, "{} vs {}+{}", actor, raiser, reraiser)
            }
            Self::Postflop { multiway, in_position, aggressor } => write!(
                f,
                "{} {} {}",
                if *multiway { "MW" } else { "HU" },
                if *in_position { "IP" } else { "OOP" },
                if *aggressor { "PFR" } else { "PFC" },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contexts_order_for_keying() {
        let a = Context::Opening { actor: Role::Lojack };
        let b = Context::Facing { raiser: Role::Lojack, actor: Role::BigBlind };
        assert!(a < b);
        assert!(a == a.clone());
    }

    #[test]
    fn display_is_compact() {
        let spot = Context::Postflop { multiway: false, in_position: true, aggressor: false };
        assert!(format!("{}", spot) == "HU IP PFC");
        let open = Context::Opening { actor: Role::Cutoff };
        assert!(format!("{}", open) == "CO opens");
    }
}
