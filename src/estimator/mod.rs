pub mod engine;
pub mod tips;

pub use engine::*;
pub use tips::*;
