pub mod game;
pub mod recorder;

pub use game::*;
pub use recorder::*;
