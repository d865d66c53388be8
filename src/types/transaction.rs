//! Arbitrage transaction history types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::EngineError;

/// One historical arbitrage execution as shown in the dashboard history view.
///
/// Money and percentage fields are `Decimal`; `execution_time` is elapsed
/// seconds. `profit_percentage` is stored independently of `profit` and
/// `usdc_in` rather than derived on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArbitrageTransaction {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub usdc_in: Decimal,
    pub bonds_received: Decimal,
    pub usdc_out: Decimal,
    pub profit: Decimal,
    pub profit_percentage: Decimal,
    pub execution_time: Decimal,
    pub gas_used: u64,
    pub transaction_hash: String,
    pub block_number: u64,
    pub status: ArbitrageStatus,
    pub from_market: String,
    pub to_market: String,
}

/// Lifecycle of an arbitrage transaction. Wire values are lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArbitrageStatus {
    Pending,
    Completed,
    Failed,
    Reverted,
}

impl fmt::Display for ArbitrageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArbitrageStatus::Pending => "pending",
            ArbitrageStatus::Completed => "completed",
            ArbitrageStatus::Failed => "failed",
            ArbitrageStatus::Reverted => "reverted",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ArbitrageStatus {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(ArbitrageStatus::Pending),
            "completed" => Ok(ArbitrageStatus::Completed),
            "failed" => Ok(ArbitrageStatus::Failed),
            "reverted" => Ok(ArbitrageStatus::Reverted),
            _ => Err(EngineError::UnknownVariant {
                field: "status",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn status_serializes_to_lowercase_wire_values() {
        assert_eq!(
            serde_json::to_string(&ArbitrageStatus::Completed).unwrap(),
            "\"completed\""
        );
        assert_eq!(
            serde_json::to_string(&ArbitrageStatus::Reverted).unwrap(),
            "\"reverted\""
        );
    }

    #[test]
    fn status_parses_wire_values_case_insensitively() {
        assert_eq!(
            "completed".parse::<ArbitrageStatus>().unwrap(),
            ArbitrageStatus::Completed
        );
        assert_eq!(
            "PENDING".parse::<ArbitrageStatus>().unwrap(),
            ArbitrageStatus::Pending
        );
        assert!(matches!(
            "settled".parse::<ArbitrageStatus>(),
            Err(EngineError::UnknownVariant { field: "status", .. })
        ));
    }

    #[test]
    fn transaction_serializes_with_camel_case_fields() {
        let tx = ArbitrageTransaction {
            id: "ARB-1000".to_string(),
            timestamp: "2026-02-01T12:00:00Z".parse().unwrap(),
            usdc_in: dec!(1000),
            bonds_received: dec!(1042),
            usdc_out: dec!(1060),
            profit: dec!(60),
            profit_percentage: dec!(6),
            execution_time: dec!(1.25),
            gas_used: 150_000,
            transaction_hash: "0xabc".to_string(),
            block_number: 15_000_001,
            status: ArbitrageStatus::Completed,
            from_market: "Uniswap".to_string(),
            to_market: "Curve".to_string(),
        };

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["usdcIn"], serde_json::json!("1000"));
        assert_eq!(json["executionTime"], serde_json::json!("1.25"));
        assert_eq!(json["fromMarket"], serde_json::json!("Uniswap"));
        assert_eq!(json["status"], serde_json::json!("completed"));
    }

    #[test]
    fn transaction_round_trips_through_json() {
        let tx = ArbitrageTransaction {
            id: "ARB-1001".to_string(),
            timestamp: "2026-02-01T12:00:00Z".parse().unwrap(),
            usdc_in: dec!(2500.50),
            bonds_received: dec!(2563.01),
            usdc_out: dec!(2612.25),
            profit: dec!(111.75),
            profit_percentage: dec!(4.47),
            execution_time: dec!(0.84),
            gas_used: 210_433,
            transaction_hash: "0xdef".to_string(),
            block_number: 15_421_009,
            status: ArbitrageStatus::Pending,
            from_market: "Balancer".to_string(),
            to_market: "1inch".to_string(),
        };

        let json = serde_json::to_string(&tx).unwrap();
        let back: ArbitrageTransaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tx);
    }
}
