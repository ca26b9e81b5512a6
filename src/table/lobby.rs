use super::rules::Rules;
use super::table::Table;
use crate::Chips;
use crate::error::Error;
use crate::players::player::Player;
use crate::players::tabular::Tabular;
use crate::round::result::HandResult;
use crate::strategy::sheet::Sheet;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Opaque handle to one open table.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(u64);

/// u64 isomorphism
impl From<u64> for GameId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
impl From<GameId> for u64 {
    fn from(id: GameId) -> Self {
        id.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "table #{}", self.0)
    }
}

/// The host's collection of concurrent games.
///
/// Every table it opens is seated entirely by sheet players sharing
/// one strategy book, so the lobby is the whole surface a host needs:
/// open a game, play hands on it by id, move its button, close it.
#[derive(Debug)]
pub struct Lobby {
    games: BTreeMap<GameId, Table>,
    sheet: Arc<Sheet>,
    rules: Rules,
    next: u64,
    rng: SmallRng,
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new()
    }
}

impl Lobby {
    /// A lobby playing random strategies at default stakes.
    pub fn new() -> Self {
        Self::seeded(rand::rng().random::<u64>())
    }

    /// A lobby whose sheet, shuffles, and decisions all replay from
    /// one seed.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let sheet = Arc::new(Sheet::random(&mut rng));
        Self {
            games: BTreeMap::new(),
            sheet,
            rules: Rules::default(),
            next: 0,
            rng,
        }
    }

    pub fn sheet(&self) -> Arc<Sheet> {
        self.sheet.clone()
    }
    pub fn len(&self) -> usize {
        self.games.len()
    }
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Opens a fresh table with the given number of seats, all bought
    /// in per the lobby rules unless a buyin override is given. The
    /// button starts on a random seat and rotates from there.
    pub fn open(&mut self, seats: usize, buyin: Option<Chips>) -> GameId {
        let id = GameId::from(self.next);
        let rules = Rules {
            buyin: buyin.unwrap_or(self.rules.buyin),
            ..self.rules
        };
        let players = (0..seats)
            .map(|_| Box::new(Tabular::new(self.sheet.clone())) as Box<dyn Player>)
            .collect::<Vec<Box<dyn Player>>>();
        let mut table = Table::seeded(rules, players, self.rng.random::<u64>());
        for _ in 0..self.rng.random_range(0..seats) {
            table.rotate();
        }
        self.next += 1;
        self.games.insert(id, table);
        log::info!("opened {} with {} seats", id, seats);
        id
    }

    /// Plays one hand at the given table.
    pub fn play(&mut self, id: GameId) -> Result<HandResult, Error> {
        self.games
            .get_mut(&id)
            .ok_or(Error::UnknownTable(id))?
            .play()
    }

    /// Moves the given table's button for its next hand.
    pub fn rotate(&mut self, id: GameId) -> Result<(), Error> {
        self.games
            .get_mut(&id)
            .ok_or(Error::UnknownTable(id))?
            .rotate();
        Ok(())
    }

    /// Tears the given table down. Whatever hand it was mid-way
    /// through is simply gone.
    pub fn close(&mut self, id: GameId) -> Result<(), Error> {
        self.games
            .remove(&id)
            .map(|_| log::info!("closed {}", id))
            .ok_or(Error::UnknownTable(id))
    }
}
