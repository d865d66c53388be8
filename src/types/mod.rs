//! Core data types and structures

pub mod execution;
pub mod filters;
pub mod finance;
pub mod market;
pub mod redemption;
pub mod transaction;

pub use execution::*;
pub use filters::*;
pub use finance::*;
pub use market::*;
pub use redemption::*;
pub use transaction::*;
