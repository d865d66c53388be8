//! MonadBond Engine - core logic behind the MonadBond arbitrage dashboard
//!
//! Filters, sorts and aggregates arbitrage transaction history, derives
//! redemption values, yield projections and profit distributions for bond
//! vault positions, and simulates executions and redemptions against
//! configurable market quotes.

pub mod config;
pub mod errors;
pub mod finance;
pub mod history;
pub mod simulation;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{EngineError, EngineResult};
pub use types::*;

pub use finance::{
    allocate_distribution, collateral_bar_fill, collateralization_ratio, daily_accruals,
    project_yield, redemption_value, yield_earned, yield_percentage,
};
pub use history::{
    apply_history_query, filter_history, profit_by_market, sort_history, HistoryStats,
};
pub use simulation::{
    apply_redemption, generate_history, generate_history_with_rng, ArbitrageSimulator,
    SimulatedVault,
};
pub use utils::format::{
    format_address, format_currency, format_date, format_time, format_time_ago,
};
