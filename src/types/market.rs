//! Market quote and spread types

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketQuote {
    pub name: String,
    pub price: Decimal,
    /// Available depth in USD. The dashboard renders this as a currency.
    pub liquidity: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpreadStatus {
    Executable,
    Unavailable,
}

/// Two-venue spread snapshot the execution simulator trades against.
/// Convention is buy on `market_a`, sell on `market_b`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpreadQuote {
    pub market_a: MarketQuote,
    pub market_b: MarketQuote,
    pub spread: Decimal,
    pub profit_per_bond: Decimal,
    pub status: SpreadStatus,
}

impl SpreadQuote {
    pub fn between(market_a: MarketQuote, market_b: MarketQuote) -> Self {
        let spread = market_b.price - market_a.price;
        let status = if spread > Decimal::ZERO {
            SpreadStatus::Executable
        } else {
            SpreadStatus::Unavailable
        };
        Self {
            market_a,
            market_b,
            spread,
            profit_per_bond: spread,
            status,
        }
    }

    pub fn is_executable(&self) -> bool {
        self.status == SpreadStatus::Executable
    }
}
