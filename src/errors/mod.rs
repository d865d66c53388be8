//! Error handling for the engine

pub mod engine_error;

pub use engine_error::*;
