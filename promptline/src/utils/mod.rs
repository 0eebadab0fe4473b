pub mod menu;
pub use menu::Menu;

pub mod sanitize;
pub use sanitize::{Integer, IsBetween, MatchTokens, NotBlank, Rejection, Validate};

pub mod terminal;
pub use terminal::Terminal;
