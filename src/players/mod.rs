pub mod player;
pub mod scripted;
pub mod tabular;

pub use player::Player;
pub use scripted::Scripted;
pub use tabular::Tabular;
