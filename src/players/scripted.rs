use super::player::Player;
use crate::error::Error;
use crate::round::choice::Choice;
use crate::round::round::Round;
use rand::RngCore;
use std::collections::VecDeque;

/// A seat that plays a fixed sequence of choices.
///
/// Pops the next scripted choice on each turn and falls back to a call
/// once the script runs dry, which checks whenever checking is free.
/// Meant for driving hands down known lines in tests and demos.
#[derive(Debug, Default, Clone)]
pub struct Scripted {
    script: VecDeque<Choice>,
}

impl Scripted {
    pub fn new(script: impl IntoIterator<Item = Choice>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl Player for Scripted {
    fn decide(&mut self, _: &Round, _: &mut dyn RngCore) -> Result<Choice, Error> {
        Ok(self.script.pop_front().unwrap_or(Choice::Call))
    }
}
