use super::role::Role;
use crate::error::Error;

/// Maps physical seats to rotating roles.
///
/// The button seat anchors everything. Offsets from the button walk
/// clockwise, so offset 1 is the small blind, offset 2 the big blind,
/// and the remaining roles fill in behind. Heads up is the one special
/// case where the button itself posts the small blind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    n: usize,
    button: usize,
}

impl Rotation {
    pub fn new(n: usize) -> Self {
        Self::from((n, 0))
    }

    pub fn n(&self) -> usize {
        self.n
    }
    pub fn button(&self) -> usize {
        self.button
    }

    /// Moves the button one seat clockwise between hands.
    pub fn advance(&mut self) {
        self.button = (self.button + 1) % self.n;
    }

    /// The role sitting in the given seat this hand.
    pub fn role_of(&self, seat: usize) -> Role {
        assert!(seat < self.n);
        let ring = Role::ring(self.n);
        let offset = (seat + self.n - self.button) % self.n;
        let anchor = self.n.saturating_sub(3);
        ring[(offset + anchor) % self.n]
    }

    /// The seat holding the given role this hand, if the table is big
    /// enough to seat it.
    pub fn seat_of(&self, role: Role) -> Option<usize> {
        (0..self.n).find(|&seat| self.role_of(seat) == role)
    }

    /// Next seat after the given one, wrapping, that is still live.
    pub fn next_active(&self, seat: usize, live: &[usize]) -> Result<usize, Error> {
        (1..=self.n)
            .map(|step| (seat + step) % self.n)
            .find(|cand| live.contains(cand))
            .ok_or(Error::NoActiveSeats)
    }
}

impl From<(usize, usize)> for Rotation {
    fn from((n, button): (usize, usize)) -> Self {
        assert!(n >= 2);
        assert!(n <= 6);
        assert!(button < n);
        Self { n, button }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_max_layout() {
        let rotation = Rotation::new(6);
        assert!(rotation.role_of(0) == Role::Button);
        assert!(rotation.role_of(1) == Role::SmallBlind);
        assert!(rotation.role_of(2) == Role::BigBlind);
        assert!(rotation.role_of(3) == Role::Lojack);
        assert!(rotation.role_of(4) == Role::Hijack);
        assert!(rotation.role_of(5) == Role::Cutoff);
    }

    #[test]
    fn heads_up_button_is_small_blind() {
        let rotation = Rotation::new(2);
        assert!(rotation.role_of(0) == Role::SmallBlind);
        assert!(rotation.role_of(1) == Role::BigBlind);
        assert!(rotation.seat_of(Role::Button).is_none());
    }

    #[test]
    fn button_rotates_roles() {
        let mut rotation = Rotation::new(6);
        rotation.advance();
        assert!(rotation.button() == 1);
        assert!(rotation.role_of(1) == Role::Button);
        assert!(rotation.role_of(2) == Role::SmallBlind);
        assert!(rotation.role_of(0) == Role::Cutoff);
        for _ in 0..5 {
            rotation.advance();
        }
        assert!(rotation.button() == 0);
    }

    #[test]
    fn roles_are_bijective() {
        for n in 2..=6 {
            for button in 0..n {
                let rotation = Rotation::from((n, button));
                for role in Role::ring(n) {
                    let seat = rotation.seat_of(*role).unwrap();
                    assert!(rotation.role_of(seat) == *role);
                }
            }
        }
    }

    #[test]
    fn next_active_wraps_and_skips() {
        let rotation = Rotation::new(6);
        let live = vec![0, 3, 5];
        assert!(rotation.next_active(0, &live) == Ok(3));
        assert!(rotation.next_active(3, &live) == Ok(5));
        assert!(rotation.next_active(5, &live) == Ok(0));
        assert!(rotation.next_active(1, &live) == Ok(3));
    }

    #[test]
    fn next_active_without_live_seats() {
        let rotation = Rotation::new(6);
        assert!(rotation.next_active(0, &[]) == Err(Error::NoActiveSeats));
    }
}
