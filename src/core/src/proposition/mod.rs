pub mod editor;
pub mod proposition;

pub use editor::*;
pub use proposition::*;
