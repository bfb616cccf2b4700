pub mod types;
pub mod rules;
pub mod patterns;
pub mod normalize;
pub mod engine;

pub use types::*;
pub use rules::*;
pub use patterns::*;
pub use normalize::*;
pub use engine::*;
