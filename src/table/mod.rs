pub mod lobby;
pub mod role;
pub mod rotation;
pub mod rules;
pub mod seat;
pub mod table;

pub use lobby::GameId;
pub use lobby::Lobby;
pub use role::Role;
pub use rotation::Rotation;
pub use rules::Rules;
pub use seat::Seat;
pub use seat::State;
pub use table::Table;
