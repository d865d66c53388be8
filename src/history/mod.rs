//! Arbitrage history filtering, sorting and aggregation

pub mod filter;
pub mod sort;
pub mod stats;

pub use filter::*;
pub use sort::*;
pub use stats::*;

#[cfg(test)]
pub(crate) mod fixtures {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::types::{ArbitrageStatus, ArbitrageTransaction};

    /// History record with fixed venue/gas fields so tests only spell out
    /// what they assert on.
    pub fn tx(
        id: &str,
        timestamp: &str,
        profit: Decimal,
        execution_time: Decimal,
        status: ArbitrageStatus,
    ) -> ArbitrageTransaction {
        let usdc_in = dec!(5000);
        ArbitrageTransaction {
            id: id.to_string(),
            timestamp: timestamp.parse().expect("fixture timestamp"),
            usdc_in,
            bonds_received: dec!(5100),
            usdc_out: usdc_in + profit,
            profit,
            profit_percentage: (profit / usdc_in * dec!(100)).round_dp(2),
            execution_time,
            gas_used: 150_000,
            transaction_hash: format!("0x{}", "ab".repeat(32)),
            block_number: 15_100_000,
            status,
            from_market: "Uniswap".to_string(),
            to_market: "Curve".to_string(),
        }
    }
}
