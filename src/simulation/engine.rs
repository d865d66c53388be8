//! Simulated arbitrage execution

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::time::{Duration, Instant};
use tracing::info;
use uuid::Uuid;

use crate::errors::{EngineError, EngineResult};
use crate::simulation::generator::random_tx_hash;
use crate::types::{ArbitrageStatus, ExecutionReport, SpreadQuote};

/// Executes buy-low/sell-high round trips against a fixed two-venue quote,
/// with simulated confirmation latency and a configurable failure rate.
pub struct ArbitrageSimulator {
    quote: SpreadQuote,
    failure_rate: f64,
    execution_delay: Duration,
}

impl ArbitrageSimulator {
    pub fn new(quote: SpreadQuote, failure_rate: f64, execution_delay_ms: u64) -> Self {
        Self {
            quote,
            failure_rate: failure_rate.clamp(0.0, 1.0),
            execution_delay: Duration::from_millis(execution_delay_ms),
        }
    }

    pub fn quote(&self) -> &SpreadQuote {
        &self.quote
    }

    /// Buys `amount` bonds on the cheaper venue and sells them on the richer
    /// one. Fails fast on a non-positive amount or a non-executable spread,
    /// then reverts with probability `failure_rate` after the simulated
    /// confirmation delay.
    pub async fn execute(&self, amount: Decimal) -> EngineResult<ExecutionReport> {
        if amount <= Decimal::ZERO {
            return Err(EngineError::InvalidAmount {
                amount,
                reason: "execution amount must be positive".to_string(),
            });
        }
        if !self.quote.is_executable() {
            return Err(EngineError::MarketUnavailable {
                spread: self.quote.spread,
            });
        }

        let start = Instant::now();
        tokio::time::sleep(self.execution_delay).await;

        if rand::random::<f64>() < self.failure_rate {
            return Err(EngineError::ExecutionFailed {
                reason: "Transaction failed due to network congestion".to_string(),
            });
        }

        let execution_time = Decimal::from(start.elapsed().as_millis() as u64) / dec!(1000);
        let total_profit = amount * self.quote.spread;

        let mut rng = rand::rng();
        let report = ExecutionReport {
            id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now(),
            status: ArbitrageStatus::Completed,
            from_market: self.quote.market_a.name.clone(),
            to_market: self.quote.market_b.name.clone(),
            amount_bought: amount,
            buy_price: self.quote.market_a.price,
            amount_sold: amount,
            sell_price: self.quote.market_b.price,
            total_profit,
            mev_extracted: Decimal::ZERO,
            execution_time,
            gas_used: rng.random_range(100_000..300_000u64),
            block_number: rng.random_range(15_000_000..16_000_000u64),
            transaction_hash: random_tx_hash(&mut rng),
        };

        info!(
            "🎭 Simulated execution {}: {} bonds across {} -> {}, profit ${}",
            report.id, amount, report.from_market, report.to_market, total_profit
        );

        Ok(report)
    }
}
