//! Mock arbitrage history generation

use chrono::{Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{ArbitrageStatus, ArbitrageTransaction};

const MARKETS: [&str; 5] = ["Uniswap", "Sushiswap", "Balancer", "Curve", "1inch"];

// Completed three times as often as each of the other outcomes.
const STATUS_BUCKETS: [ArbitrageStatus; 6] = [
    ArbitrageStatus::Completed,
    ArbitrageStatus::Completed,
    ArbitrageStatus::Completed,
    ArbitrageStatus::Failed,
    ArbitrageStatus::Pending,
    ArbitrageStatus::Reverted,
];

const LOOKBACK_MS: i64 = 30 * 24 * 60 * 60 * 1_000;

/// Generates `count` plausible history records with ids `ARB-1000` upward,
/// timestamped within the last 30 days.
pub fn generate_history(count: usize) -> Vec<ArbitrageTransaction> {
    generate_history_with_rng(&mut rand::rng(), count)
}

/// [`generate_history`] against a caller-supplied RNG, so tests can seed it.
pub fn generate_history_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Vec<ArbitrageTransaction> {
    let now = Utc::now();
    (0..count)
        .map(|i| {
            let from_idx = rng.random_range(0..MARKETS.len());
            let to_idx = (from_idx + 1 + rng.random_range(0..MARKETS.len() - 1)) % MARKETS.len();

            let usdc_in = Decimal::from(rng.random_range(1_000..11_000u32));
            let profit = Decimal::from(rng.random_range(50..1_050u32));
            let profit_percentage = (profit / usdc_in * dec!(100)).round_dp(2);
            let bonds_received =
                (usdc_in * (Decimal::ONE + profit_percentage / dec!(100))).round_dp(2);

            ArbitrageTransaction {
                id: format!("ARB-{}", 1_000 + i),
                timestamp: now - Duration::milliseconds(rng.random_range(0..LOOKBACK_MS)),
                usdc_in,
                bonds_received,
                usdc_out: usdc_in + profit,
                profit,
                profit_percentage,
                // Millisecond resolution over 0.5s..5.5s
                execution_time: Decimal::from(rng.random_range(500..5_500u32)) / dec!(1000),
                gas_used: rng.random_range(100_000..300_000u64),
                transaction_hash: random_tx_hash(rng),
                block_number: rng.random_range(15_000_000..16_000_000u64),
                status: STATUS_BUCKETS[rng.random_range(0..STATUS_BUCKETS.len())],
                from_market: MARKETS[from_idx].to_string(),
                to_market: MARKETS[to_idx].to_string(),
            }
        })
        .collect()
}

/// `"0x"` followed by 64 random lowercase hex chars.
pub(crate) fn random_tx_hash<R: Rng + ?Sized>(rng: &mut R) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let digits: String = (0..64)
        .map(|_| HEX[rng.random_range(0..HEX.len())] as char)
        .collect();
    format!("0x{}", digits)
}
