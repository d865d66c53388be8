//! Display and printing utilities

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::time::Instant;
use tracing::{info, warn};

use crate::finance::collateral_bar_fill;
use crate::history::HistoryStats;
use crate::types::{
    ArbitrageStatus, ArbitrageTransaction, DailyAccrual, DistributionSegment, ExecutionReport,
    RedemptionReceipt, VaultPosition, YieldProjection,
};
use crate::utils::format::{
    format_address, format_currency, format_date, format_time, format_time_ago,
};

const BAR_CELLS: u32 = 20;

fn status_badge(status: ArbitrageStatus) -> &'static str {
    match status {
        ArbitrageStatus::Completed => "✅ completed",
        ArbitrageStatus::Failed => "❌ failed",
        ArbitrageStatus::Pending => "⏳ pending",
        ArbitrageStatus::Reverted => "↩️ reverted",
    }
}

pub fn print_history_table(records: &[ArbitrageTransaction], now: DateTime<Utc>) {
    info!("\n📜 Arbitrage History ({} records)", records.len());
    for tx in records {
        info!(
            "   {:<9} {:<15} {:<24} {:>11} {:>7}  {}",
            tx.id,
            format_time_ago(tx.timestamp, now),
            format!("{} -> {}", tx.from_market, tx.to_market),
            format_currency(tx.profit),
            format_time(tx.execution_time),
            status_badge(tx.status),
        );
    }
}

pub fn print_history_stats(stats: &HistoryStats) {
    info!("\n📊 History Stats");
    info!(
        "   Transactions: {} ({} completed, {} failed, {} pending, {} reverted)",
        stats.total_transactions, stats.completed, stats.failed, stats.pending, stats.reverted
    );
    info!("   Success rate: {}%", stats.success_rate_pct);
    info!("   Total profit: {}", format_currency(stats.total_profit));
    info!("   Avg profit: {}", format_currency(stats.avg_profit));
    if let (Some(best), Some(worst)) = (stats.best_profit, stats.worst_profit) {
        info!(
            "   Best / worst: {} / {}",
            format_currency(best),
            format_currency(worst)
        );
    }
    info!(
        "   Avg execution time: {}",
        format_time(stats.avg_execution_time)
    );
    info!("   Total gas used: {}", stats.total_gas_used);
}

pub fn print_execution_report(report: &ExecutionReport) {
    warn!("\n✅ ARBITRAGE EXECUTED {}", format_address(&report.id, 6, 4));
    warn!("📍 Route: {} -> {}", report.from_market, report.to_market);
    warn!("💰 Execution Details:");
    warn!(
        "   Bought: {} bonds @ {}",
        report.amount_bought,
        format_currency(report.buy_price)
    );
    warn!(
        "   Sold:   {} bonds @ {}",
        report.amount_sold,
        format_currency(report.sell_price)
    );
    warn!("   Profit: {}", format_currency(report.total_profit));
    warn!("   MEV extracted: {}", format_currency(report.mev_extracted));
    warn!(
        "   Tx Hash: {}",
        format_address(&report.transaction_hash, 6, 4)
    );
    warn!("   Gas: {} @ block {}", report.gas_used, report.block_number);
    warn!("   Execution Time: {}", format_time(report.execution_time));
}

pub fn print_redemption_receipt(receipt: &RedemptionReceipt, position: &VaultPosition) {
    warn!(
        "\n🏦 REDEMPTION SETTLED {}",
        format_address(&receipt.transaction_hash, 6, 4)
    );
    warn!("   Redeemed: {} MBS", receipt.mbs_redeemed);
    warn!("   Value: {}", format_currency(receipt.redemption_value));
    warn!("   Yield earned: {}", format_currency(receipt.yield_earned));
    warn!("   Settled: {}", format_date(receipt.timestamp));
    warn!(
        "   Remaining: {} MBS, {} deposited, {} accrued",
        position.mbs_balance,
        format_currency(position.bond_deposit),
        format_currency(position.accrued_yield)
    );
}

pub fn print_yield_projection(projection: &YieldProjection, accruals: &[DailyAccrual]) {
    info!(
        "\n📈 Yield Projection on {}",
        format_currency(projection.principal)
    );
    info!(
        "   APY: {}% (monthly {}%, daily {}%)",
        projection.annual_rate_pct,
        projection.monthly_rate_pct.round_dp(4),
        projection.daily_rate_pct.round_dp(4)
    );
    info!(
        "   Earnings: {} yearly, {} monthly, {} daily",
        format_currency(projection.yearly_earnings),
        format_currency(projection.monthly_earnings),
        format_currency(projection.daily_earnings)
    );
    if !accruals.is_empty() {
        info!("   Accrual trail:");
        for accrual in accruals {
            info!(
                "     day {:>2}: {}",
                accrual.days_ago,
                format_currency(accrual.amount)
            );
        }
    }
}

pub fn print_collateralization(ratio: Decimal) {
    let fill = collateral_bar_fill(ratio);
    let filled = (fill / dec!(5)).round().to_u32().unwrap_or(0).min(BAR_CELLS);
    info!("\n🔒 Collateralization: {}%", ratio.round_dp(2));
    info!(
        "   [{}{}]",
        "█".repeat(filled as usize),
        "░".repeat((BAR_CELLS - filled) as usize)
    );
}

pub fn print_distribution(total_profit: Decimal, segments: &[DistributionSegment]) {
    info!(
        "\n🥧 Profit Distribution ({})",
        format_currency(total_profit)
    );
    for segment in segments {
        info!(
            "   {:<12} {:>11}  {:>6}%  arc {}°..{}°{}",
            segment.share.label,
            format_currency(segment.share.value),
            segment.percent.round_dp(2),
            segment.start_angle.round_dp(1),
            segment.end_angle.round_dp(1),
            if segment.show_label { "" } else { "  (label hidden)" },
        );
    }
}

pub fn print_session_stats(
    start_time: Instant,
    attempted_executions: u32,
    landed_executions: u32,
    failed_executions: u32,
    session_profit: Decimal,
    stats: &HistoryStats,
) {
    let runtime = start_time.elapsed().as_secs();

    info!("\n📊 Session Statistics ({}s)", runtime);
    info!("   🚀 EXECUTIONS:");
    info!("     Attempted: {}", attempted_executions);
    info!("     Landed: {}", landed_executions);
    info!("     Failed: {}", failed_executions);
    info!(
        "     Success rate: {:.1}%",
        if attempted_executions > 0 {
            landed_executions as f64 / attempted_executions as f64 * 100.0
        } else {
            0.0
        }
    );
    info!("     Session profit: {}", format_currency(session_profit));
    info!("   📜 HISTORY:");
    info!("     Records: {}", stats.total_transactions);
    info!("     Completed: {}", stats.completed);
    info!("     Total profit: {}", format_currency(stats.total_profit));
    info!("     Success rate: {}%", stats.success_rate_pct);
    info!("");
}
