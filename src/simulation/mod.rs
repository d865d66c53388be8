//! Simulated market activity: mock history, execution and vault redemption

pub mod engine;
pub mod generator;
pub mod vault;

pub use engine::*;
pub use generator::*;
pub use vault::*;
