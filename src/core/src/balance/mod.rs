pub mod contract;
pub mod heuristic;
pub mod strategy;
pub mod validate;

pub use contract::*;
pub use heuristic::*;
pub use strategy::*;
pub use validate::*;
