//! MonadBond Engine - Main Entry Point
//!
//! Demo session exercising the dashboard flows end to end: mock history
//! through the configured query, simulated executions, vault yield and
//! redemption, and the profit distribution roll-up.

use anyhow::Result;
use monadbond_engine::*;
use rust_decimal::Decimal;
use std::time::Instant;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    let _logging_guard = utils::setup_logging()?;
    utils::setup_output_directories()?;

    // Load configuration
    let config = CONFIG.clone();

    info!("🏦 MonadBond Engine v0.3.0 - History, Yield & Redemption");
    info!("📋 Configuration:");
    info!("   Annual Rate: {}%", config.annual_rate_pct);
    info!("   Mock History: {} records", config.mock_history_size);
    info!(
        "   Simulated Executions: {} x {} bonds",
        config.simulated_executions, config.execution_amount
    );
    info!("   Failure Rate: {:.0}%", config.sim_failure_rate * 100.0);
    info!(
        "   Markets: A @ {} / B @ {}",
        format_currency(config.market_a_price),
        format_currency(config.market_b_price)
    );

    let start_time = Instant::now();
    let mut session = SessionState::new();

    // Phase 1: mock history through the env-configured query
    let mut history = generate_history(config.mock_history_size);
    let query = config.history_filter();
    let visible = apply_history_query(&history, &query);

    utils::print_history_table(&visible, chrono::Utc::now());
    utils::print_history_stats(&HistoryStats::from_records(&visible));

    // Phase 2: simulated executions against the configured quote
    let quote = SpreadQuote::between(
        MarketQuote {
            name: "Market A".to_string(),
            price: config.market_a_price,
            liquidity: config.market_a_liquidity,
        },
        MarketQuote {
            name: "Market B".to_string(),
            price: config.market_b_price,
            liquidity: config.market_b_liquidity,
        },
    );
    info!(
        "\n💹 Spread: {} -> {} = {} per bond ({:?})",
        format_currency(quote.market_a.price),
        format_currency(quote.market_b.price),
        format_currency(quote.spread),
        quote.status
    );
    let simulator =
        ArbitrageSimulator::new(quote, config.sim_failure_rate, config.execution_delay_ms);

    for attempt in 1..=config.simulated_executions {
        session.attempted_executions += 1;
        match simulator.execute(config.execution_amount).await {
            Ok(report) => {
                session.landed_executions += 1;
                session.session_profit += report.total_profit;
                utils::print_execution_report(&report);

                let id = format!("ARB-{}", 1_000 + history.len());
                history.push(report.into_transaction(id));
            }
            Err(e) => {
                session.failed_executions += 1;
                error!("❌ Execution attempt {} failed: {}", attempt, e);
            }
        }
    }

    // Phase 3: vault yield and redemption
    let position = VaultPosition {
        mbs_balance: config.mbs_balance,
        bond_deposit: config.bond_deposit,
        accrued_yield: config.accrued_yield,
        time_locked_days: config.time_locked_days,
        annual_rate_pct: config.annual_rate_pct,
    };

    let projection = project_yield(position.bond_deposit, position.annual_rate_pct);
    let accruals = daily_accruals(
        position.bond_deposit,
        position.annual_rate_pct,
        config::YIELD_TRAIL_DAYS,
    );
    utils::print_yield_projection(&projection, &accruals);

    let ratio = collateralization_ratio(position.mbs_balance, position.bond_deposit);
    utils::print_collateralization(ratio);

    let mut vault = SimulatedVault::new(position, config.redemption_delay_ms);
    match vault.redeem(config.redeem_amount).await {
        Ok(receipt) => utils::print_redemption_receipt(&receipt, vault.position()),
        Err(e) => error!("❌ Redemption failed: {}", e),
    }

    // Phase 4: distribution and final stats over the grown history
    let stats = HistoryStats::from_records(&history);
    let shares = profit_by_market(&history);
    if stats.total_profit > Decimal::ZERO {
        let segments = allocate_distribution(stats.total_profit, &shares)?;
        utils::print_distribution(stats.total_profit, &segments);
    }

    utils::print_session_stats(
        start_time,
        session.attempted_executions,
        session.landed_executions,
        session.failed_executions,
        session.session_profit,
        &stats,
    );
    info!("💾 Session summary: {}", serde_json::to_string(&stats)?);

    Ok(())
}

/// Session counters for the execution phase
struct SessionState {
    attempted_executions: u32,
    landed_executions: u32,
    failed_executions: u32,
    session_profit: Decimal,
}

impl SessionState {
    fn new() -> Self {
        Self {
            attempted_executions: 0,
            landed_executions: 0,
            failed_executions: 0,
            session_profit: Decimal::ZERO,
        }
    }
}
