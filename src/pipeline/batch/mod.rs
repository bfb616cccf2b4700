pub mod types;
pub mod runner;
pub mod sink;

pub use types::*;
pub use runner::*;
pub use sink::*;
