pub mod action;
pub mod choice;
pub mod level;
pub mod odds;
pub mod result;
pub mod round;
pub mod showdown;
pub mod turn;

pub use action::Action;
pub use choice::Choice;
pub use level::Level;
pub use odds::Odds;
pub use result::HandResult;
pub use result::Over;
pub use result::Show;
pub use round::Round;
pub use showdown::Showdown;
pub use turn::Turn;
