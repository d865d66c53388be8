//! Simulated execution result types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::types::{ArbitrageStatus, ArbitrageTransaction};

/// Result of one simulated arbitrage execution. Only produced for landed
/// executions; failures surface as errors instead.
///
/// `amount_bought`/`amount_sold` are bond quantities; USDC legs are derived
/// by price when the report is bridged into history.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReport {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub status: ArbitrageStatus,
    pub from_market: String,
    pub to_market: String,
    pub amount_bought: Decimal,
    pub buy_price: Decimal,
    pub amount_sold: Decimal,
    pub sell_price: Decimal,
    pub total_profit: Decimal,
    pub mev_extracted: Decimal,
    /// Elapsed seconds.
    pub execution_time: Decimal,
    pub gas_used: u64,
    pub block_number: u64,
    pub transaction_hash: String,
}

impl ExecutionReport {
    /// Bridges a landed execution into a history record under a new
    /// history id. `profit_percentage` is derived from the USDC leg so
    /// records produced here are internally consistent.
    pub fn into_transaction(self, id: String) -> ArbitrageTransaction {
        let usdc_in = self.amount_bought * self.buy_price;
        let usdc_out = self.amount_sold * self.sell_price;
        let profit_percentage = if usdc_in > Decimal::ZERO {
            (self.total_profit / usdc_in * dec!(100)).round_dp(2)
        } else {
            Decimal::ZERO
        };

        ArbitrageTransaction {
            id,
            timestamp: self.timestamp,
            usdc_in,
            bonds_received: self.amount_bought,
            usdc_out,
            profit: self.total_profit,
            profit_percentage,
            execution_time: self.execution_time,
            gas_used: self.gas_used,
            transaction_hash: self.transaction_hash,
            block_number: self.block_number,
            status: self.status,
            from_market: self.from_market,
            to_market: self.to_market,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn report() -> ExecutionReport {
        ExecutionReport {
            id: "exec-1".to_string(),
            timestamp: "2026-02-01T12:00:00Z".parse().unwrap(),
            status: ArbitrageStatus::Completed,
            from_market: "Market A".to_string(),
            to_market: "Market B".to_string(),
            amount_bought: dec!(100),
            buy_price: dec!(98.50),
            amount_sold: dec!(100),
            sell_price: dec!(99.10),
            total_profit: dec!(60.00),
            mev_extracted: Decimal::ZERO,
            execution_time: dec!(2.003),
            gas_used: 156_000,
            transaction_hash: "0xfeed".to_string(),
            block_number: 15_500_000,
        }
    }

    #[test]
    fn bridged_transaction_derives_usdc_legs_from_prices() {
        let tx = report().into_transaction("ARB-1025".to_string());
        assert_eq!(tx.id, "ARB-1025");
        assert_eq!(tx.usdc_in, dec!(9850.00));
        assert_eq!(tx.usdc_out, dec!(9910.00));
        assert_eq!(tx.profit, dec!(60.00));
        assert_eq!(tx.bonds_received, dec!(100));
        assert_eq!(tx.status, ArbitrageStatus::Completed);
    }

    #[test]
    fn bridged_profit_percentage_is_consistent_with_usdc_leg() {
        let tx = report().into_transaction("ARB-1026".to_string());
        // 60 / 9850 * 100 = 0.6091... rounded to 2 dp
        assert_eq!(tx.profit_percentage, dec!(0.61));
    }
}
