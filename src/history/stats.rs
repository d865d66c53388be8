//! Aggregate statistics over arbitrage history

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::types::{ArbitrageStatus, ArbitrageTransaction, ProfitShare};

// Legend colors for profit-by-market shares, assigned in first-seen order.
const SHARE_PALETTE: [&str; 5] = ["#6366f1", "#10b981", "#f59e0b", "#8b5cf6", "#ec4899"];

/// Roll-up of a history set as the dashboard stats bar shows it.
///
/// Money aggregates (`total_profit`, `avg_profit`, `best_profit`,
/// `worst_profit`) and `avg_execution_time` cover COMPLETED records only;
/// `total_gas_used` covers every record since failed submissions still burn
/// gas. Ratios are rounded to 2 decimal places, the mean execution time
/// to milliseconds. All divisions are guarded; an empty history yields
/// zeroed stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    pub total_transactions: u64,
    pub completed: u64,
    pub failed: u64,
    pub pending: u64,
    pub reverted: u64,
    pub total_profit: Decimal,
    pub success_rate_pct: Decimal,
    pub avg_profit: Decimal,
    pub avg_execution_time: Decimal,
    pub total_gas_used: u64,
    pub best_profit: Option<Decimal>,
    pub worst_profit: Option<Decimal>,
}

impl HistoryStats {
    pub fn from_records(records: &[ArbitrageTransaction]) -> Self {
        let mut completed = 0u64;
        let mut failed = 0u64;
        let mut pending = 0u64;
        let mut reverted = 0u64;
        let mut total_profit = Decimal::ZERO;
        let mut completed_execution_time = Decimal::ZERO;
        let mut total_gas_used = 0u64;
        let mut best_profit: Option<Decimal> = None;
        let mut worst_profit: Option<Decimal> = None;

        for tx in records {
            total_gas_used += tx.gas_used;
            match tx.status {
                ArbitrageStatus::Completed => {
                    completed += 1;
                    total_profit += tx.profit;
                    completed_execution_time += tx.execution_time;
                    best_profit = Some(best_profit.map_or(tx.profit, |b| b.max(tx.profit)));
                    worst_profit = Some(worst_profit.map_or(tx.profit, |w| w.min(tx.profit)));
                }
                ArbitrageStatus::Failed => failed += 1,
                ArbitrageStatus::Pending => pending += 1,
                ArbitrageStatus::Reverted => reverted += 1,
            }
        }

        let total_transactions = records.len() as u64;
        let success_rate_pct = if total_transactions > 0 {
            (Decimal::from(completed) / Decimal::from(total_transactions) * dec!(100)).round_dp(2)
        } else {
            Decimal::ZERO
        };
        let avg_profit = if completed > 0 {
            (total_profit / Decimal::from(completed)).round_dp(2)
        } else {
            Decimal::ZERO
        };
        let avg_execution_time = if completed > 0 {
            (completed_execution_time / Decimal::from(completed)).round_dp(3)
        } else {
            Decimal::ZERO
        };

        Self {
            total_transactions,
            completed,
            failed,
            pending,
            reverted,
            total_profit,
            success_rate_pct,
            avg_profit,
            avg_execution_time,
            total_gas_used,
            best_profit,
            worst_profit,
        }
    }
}

/// Groups completed profit by destination venue, in first-seen order, as
/// input for the profit distribution chart.
pub fn profit_by_market(records: &[ArbitrageTransaction]) -> Vec<ProfitShare> {
    let mut shares: Vec<ProfitShare> = Vec::new();

    for tx in records {
        if tx.status != ArbitrageStatus::Completed {
            continue;
        }
        match shares.iter_mut().find(|share| share.label == tx.to_market) {
            Some(share) => share.value += tx.profit,
            None => {
                let color = SHARE_PALETTE[shares.len() % SHARE_PALETTE.len()];
                shares.push(ProfitShare {
                    id: tx.to_market.to_lowercase(),
                    label: tx.to_market.clone(),
                    value: tx.profit,
                    color: color.to_string(),
                    description: Some(format!("Completed arbitrage into {}", tx.to_market)),
                });
            }
        }
    }

    shares
}
