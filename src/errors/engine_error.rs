//! Custom error types for the engine

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount {amount}: {reason}")]
    InvalidAmount {
        amount: Decimal,
        reason: String,
    },

    #[error("Insufficient MBS balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Non-positive denominator in {context}")]
    NonPositiveDenominator {
        context: &'static str,
    },

    #[error("Market spread not executable: {spread}")]
    MarketUnavailable {
        spread: Decimal,
    },

    #[error("Transaction failed: {reason}")]
    ExecutionFailed {
        reason: String,
    },

    #[error("Unrecognized {field} value: {value}")]
    UnknownVariant {
        field: &'static str,
        value: String,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn error_messages_render_amounts() {
        let err = EngineError::InsufficientBalance {
            requested: dec!(2000),
            available: dec!(1250.75),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient MBS balance: requested 2000, available 1250.75"
        );
    }

    #[test]
    fn denominator_error_names_context() {
        let err = EngineError::NonPositiveDenominator {
            context: "profit distribution total",
        };
        assert!(err.to_string().contains("profit distribution total"));
    }
}
