//! Simulated vault redemption

use rust_decimal::Decimal;
use std::time::Duration;
use tracing::info;

use crate::errors::{EngineError, EngineResult};
use crate::finance::{redemption_value, yield_earned};
use crate::simulation::generator::random_tx_hash;
use crate::types::{RedemptionReceipt, VaultPosition};

/// Settles a redemption against `position`, returning the successor position
/// and a receipt. The input position is left untouched.
///
/// Redeeming draws down `mbs_balance` by the redeemed amount,
/// `bond_deposit` by the principal leg and `accrued_yield` by the yield
/// leg, each floored at zero.
pub fn apply_redemption(
    position: &VaultPosition,
    amount: Decimal,
) -> EngineResult<(VaultPosition, RedemptionReceipt)> {
    if amount <= Decimal::ZERO {
        return Err(EngineError::InvalidAmount {
            amount,
            reason: "redemption amount must be positive".to_string(),
        });
    }
    if amount > position.mbs_balance {
        return Err(EngineError::InsufficientBalance {
            requested: amount,
            available: position.mbs_balance,
        });
    }

    let value = redemption_value(amount, position.annual_rate_pct, position.time_locked_days);
    let earned = yield_earned(amount, position.annual_rate_pct, position.time_locked_days);

    let next = VaultPosition {
        mbs_balance: (position.mbs_balance - amount).max(Decimal::ZERO),
        bond_deposit: (position.bond_deposit - value + earned).max(Decimal::ZERO),
        accrued_yield: (position.accrued_yield - earned).max(Decimal::ZERO),
        time_locked_days: position.time_locked_days,
        annual_rate_pct: position.annual_rate_pct,
    };

    let receipt = RedemptionReceipt {
        transaction_hash: random_tx_hash(&mut rand::rng()),
        mbs_redeemed: amount,
        redemption_value: value,
        yield_earned: earned,
        timestamp: chrono::Utc::now(),
    };

    Ok((next, receipt))
}

/// A vault position plus the simulated confirmation latency of the chain
/// it nominally lives on.
pub struct SimulatedVault {
    position: VaultPosition,
    confirmation_delay: Duration,
}

impl SimulatedVault {
    pub fn new(position: VaultPosition, confirmation_delay_ms: u64) -> Self {
        Self {
            position,
            confirmation_delay: Duration::from_millis(confirmation_delay_ms),
        }
    }

    pub fn position(&self) -> &VaultPosition {
        &self.position
    }

    /// Waits out the confirmation delay, then settles the redemption and
    /// advances the held position.
    pub async fn redeem(&mut self, amount: Decimal) -> EngineResult<RedemptionReceipt> {
        tokio::time::sleep(self.confirmation_delay).await;
        let (next, receipt) = apply_redemption(&self.position, amount)?;
        self.position = next;
        info!(
            "🏦 Redeemed {} MBS for ${} ({} yield)",
            receipt.mbs_redeemed, receipt.redemption_value, receipt.yield_earned
        );
        Ok(receipt)
    }
}
