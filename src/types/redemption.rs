//! Vault position and redemption types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// A user's vault holdings as the redeem view sees them. `time_locked_days`
/// is how long the deposit has accrued, not a withdrawal gate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultPosition {
    pub mbs_balance: Decimal,
    pub bond_deposit: Decimal,
    pub accrued_yield: Decimal,
    pub time_locked_days: Decimal,
    pub annual_rate_pct: Decimal,
}

/// The demo position the dashboard boots with.
impl Default for VaultPosition {
    fn default() -> Self {
        Self {
            mbs_balance: dec!(1250.75),
            bond_deposit: dec!(1000),
            accrued_yield: dec!(42.50),
            time_locked_days: dec!(30.5),
            annual_rate_pct: dec!(4.2),
        }
    }
}

/// Confirmation of one settled redemption.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionReceipt {
    pub transaction_hash: String,
    pub mbs_redeemed: Decimal,
    pub redemption_value: Decimal,
    pub yield_earned: Decimal,
    pub timestamp: DateTime<Utc>,
}
