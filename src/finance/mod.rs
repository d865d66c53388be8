//! Financial derivation formulas: redemption, yield, distribution, collateral

pub mod collateral;
pub mod distribution;
pub mod redemption;
pub mod yields;

pub use collateral::*;
pub use distribution::*;
pub use redemption::*;
pub use yields::*;
