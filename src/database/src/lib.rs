pub mod generators;
pub mod loaders;
pub mod snapshot;
pub mod storage;

pub use generators::*;
pub use loaders::*;
pub use snapshot::*;
pub use storage::*;
