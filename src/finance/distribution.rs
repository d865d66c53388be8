//! Profit distribution pie allocation

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::LABEL_MIN_PERCENT;
use crate::errors::{EngineError, EngineResult};
use crate::types::{DistributionSegment, ProfitShare};

/// Lays the shares out around a circle in input order: each segment covers
/// `value / total_profit` of the whole, arcs accumulate from 0°, and a
/// segment shows its inline label only above [`LABEL_MIN_PERCENT`].
///
/// Shares need not sum to `total_profit`; segments simply cover their
/// proportional arc. A non-positive total is rejected rather than letting
/// every percentage degenerate.
pub fn allocate_distribution(
    total_profit: Decimal,
    shares: &[ProfitShare],
) -> EngineResult<Vec<DistributionSegment>> {
    if total_profit <= Decimal::ZERO {
        return Err(EngineError::NonPositiveDenominator {
            context: "profit distribution total",
        });
    }

    let mut segments = Vec::with_capacity(shares.len());
    let mut start_angle = Decimal::ZERO;

    for share in shares {
        let percent = share.value / total_profit * dec!(100);
        let end_angle = start_angle + percent * dec!(3.6);
        let mid_angle = (start_angle + end_angle) / dec!(2);
        segments.push(DistributionSegment {
            share: share.clone(),
            percent,
            start_angle,
            end_angle,
            mid_angle,
            show_label: percent > LABEL_MIN_PERCENT,
        });
        start_angle = end_angle;
    }

    Ok(segments)
}
