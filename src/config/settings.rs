//! Engine configuration settings and environment variable handling

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::env;
use std::str::FromStr;

use crate::types::{ArbitrageStatus, SortField, SortOrder};

// Configuration constants
pub const DEFAULT_ANNUAL_RATE_PCT: Decimal = dec!(4.2);
pub const MIN_ANNUAL_RATE_PCT: Decimal = dec!(0);
pub const MAX_ANNUAL_RATE_PCT: Decimal = dec!(100);

pub const DEFAULT_MOCK_HISTORY_SIZE: usize = 25;
pub const MAX_MOCK_HISTORY_SIZE: usize = 500;

// Simulation constants
pub const DEFAULT_FAILURE_RATE: f64 = 0.1; // 10% of submissions revert
pub const DEFAULT_EXECUTION_DELAY_MS: u64 = 2_000;
pub const DEFAULT_REDEMPTION_DELAY_MS: u64 = 1_500;
pub const MAX_SIM_DELAY_MS: u64 = 10_000;
pub const MAX_SIMULATED_EXECUTIONS: u32 = 100;

// Display constants
pub const LABEL_MIN_PERCENT: Decimal = dec!(10); // pie slices below this hide their inline label
pub const YIELD_TRAIL_DAYS: u32 = 7;

#[derive(Debug, Clone)]
pub struct Config {
    pub annual_rate_pct: Decimal,
    pub mock_history_size: usize,
    // Simulated execution
    pub sim_failure_rate: f64,
    pub execution_delay_ms: u64,
    pub simulated_executions: u32,
    pub execution_amount: Decimal,
    // Market quotes
    pub market_a_price: Decimal,
    pub market_b_price: Decimal,
    pub market_a_liquidity: Decimal,
    pub market_b_liquidity: Decimal,
    // Vault position
    pub mbs_balance: Decimal,
    pub bond_deposit: Decimal,
    pub accrued_yield: Decimal,
    pub time_locked_days: Decimal,
    pub redemption_delay_ms: u64,
    pub redeem_amount: Decimal,
    // History query
    pub history_status: Option<ArbitrageStatus>,
    pub history_min_profit: Option<Decimal>,
    pub history_max_profit: Option<Decimal>,
    pub history_sort_by: Option<SortField>,
    pub history_sort_order: Option<SortOrder>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            annual_rate_pct: env::var("ANNUAL_RATE_PCT")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(DEFAULT_ANNUAL_RATE_PCT)
                .max(MIN_ANNUAL_RATE_PCT)
                .min(MAX_ANNUAL_RATE_PCT),
            mock_history_size: env::var("MOCK_HISTORY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MOCK_HISTORY_SIZE)
                .min(MAX_MOCK_HISTORY_SIZE),
            sim_failure_rate: env::var("SIM_FAILURE_RATE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_FAILURE_RATE)
                .clamp(0.0, 1.0),
            execution_delay_ms: env::var("EXECUTION_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_EXECUTION_DELAY_MS)
                .min(MAX_SIM_DELAY_MS),
            simulated_executions: env::var("SIMULATED_EXECUTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3)
                .min(MAX_SIMULATED_EXECUTIONS),
            execution_amount: env::var("EXECUTION_AMOUNT")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(dec!(100)),
            market_a_price: env::var("MARKET_A_PRICE")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(dec!(98.50)),
            market_b_price: env::var("MARKET_B_PRICE")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(dec!(99.10)),
            market_a_liquidity: env::var("MARKET_A_LIQUIDITY")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(dec!(1_200_000)),
            market_b_liquidity: env::var("MARKET_B_LIQUIDITY")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(dec!(890_000)),
            mbs_balance: env::var("MBS_BALANCE")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(dec!(1250.75)),
            bond_deposit: env::var("BOND_DEPOSIT")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(dec!(1000)),
            accrued_yield: env::var("ACCRUED_YIELD")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(dec!(42.50)),
            time_locked_days: env::var("TIME_LOCKED_DAYS")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(dec!(30.5)),
            redemption_delay_ms: env::var("REDEMPTION_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_REDEMPTION_DELAY_MS)
                .min(MAX_SIM_DELAY_MS),
            redeem_amount: env::var("REDEEM_AMOUNT")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok())
                .unwrap_or(dec!(500)),
            history_status: env::var("HISTORY_STATUS")
                .ok()
                .and_then(|s| s.parse().ok()),
            history_min_profit: env::var("HISTORY_MIN_PROFIT")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok()),
            history_max_profit: env::var("HISTORY_MAX_PROFIT")
                .ok()
                .and_then(|s| Decimal::from_str(&s).ok()),
            history_sort_by: env::var("HISTORY_SORT_BY")
                .ok()
                .and_then(|s| s.parse().ok())
                .or(Some(SortField::Date)),
            history_sort_order: env::var("HISTORY_SORT_ORDER")
                .ok()
                .and_then(|s| s.parse().ok())
                .or(Some(SortOrder::Desc)),
        }
    }

    /// History query assembled from the `HISTORY_*` environment keys.
    /// Unset keys impose no constraint; the sort defaults to date descending.
    pub fn history_filter(&self) -> crate::types::HistoryFilter {
        crate::types::HistoryFilter {
            status: self.history_status,
            start_date: None,
            end_date: None,
            min_profit: self.history_min_profit,
            max_profit: self.history_max_profit,
            sort_by: self.history_sort_by,
            sort_order: self.history_sort_order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_query(
        status: Option<ArbitrageStatus>,
        min_profit: Option<Decimal>,
    ) -> Config {
        Config {
            annual_rate_pct: DEFAULT_ANNUAL_RATE_PCT,
            mock_history_size: DEFAULT_MOCK_HISTORY_SIZE,
            sim_failure_rate: DEFAULT_FAILURE_RATE,
            execution_delay_ms: DEFAULT_EXECUTION_DELAY_MS,
            simulated_executions: 3,
            execution_amount: dec!(100),
            market_a_price: dec!(98.50),
            market_b_price: dec!(99.10),
            market_a_liquidity: dec!(1_200_000),
            market_b_liquidity: dec!(890_000),
            mbs_balance: dec!(1250.75),
            bond_deposit: dec!(1000),
            accrued_yield: dec!(42.50),
            time_locked_days: dec!(30.5),
            redemption_delay_ms: DEFAULT_REDEMPTION_DELAY_MS,
            redeem_amount: dec!(500),
            history_status: status,
            history_min_profit: min_profit,
            history_max_profit: None,
            history_sort_by: Some(SortField::Date),
            history_sort_order: Some(SortOrder::Desc),
        }
    }

    #[test]
    fn history_filter_carries_query_keys() {
        let config = config_with_query(Some(ArbitrageStatus::Completed), Some(dec!(100)));
        let filter = config.history_filter();
        assert_eq!(filter.status, Some(ArbitrageStatus::Completed));
        assert_eq!(filter.min_profit, Some(dec!(100)));
        assert_eq!(filter.sort_by, Some(SortField::Date));
        assert_eq!(filter.sort_order, Some(SortOrder::Desc));
        assert!(filter.start_date.is_none());
        assert!(filter.end_date.is_none());
    }

    #[test]
    fn unset_query_keys_impose_no_constraint() {
        let filter = config_with_query(None, None).history_filter();
        assert!(filter.status.is_none());
        assert!(filter.min_profit.is_none());
        assert!(filter.max_profit.is_none());
    }
}
