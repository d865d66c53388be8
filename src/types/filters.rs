//! History query types: filter criteria and sort selection

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::EngineError;
use crate::types::ArbitrageStatus;

/// Optional-field query over arbitrage history. Absent criteria match
/// everything; `sort_by`/`sort_order` are ignored by filtering and drive
/// the subsequent sort (absent `sort_by` leaves the order unchanged).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ArbitrageStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_profit: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_profit: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

/// Sortable history columns. Wire values are `date`, `profit`,
/// `executionTime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Date,
    Profit,
    ExecutionTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortField::Date => "date",
            SortField::Profit => "profit",
            SortField::ExecutionTime => "executionTime",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortField {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" => Ok(SortField::Date),
            "profit" => Ok(SortField::Profit),
            "executiontime" => Ok(SortField::ExecutionTime),
            _ => Err(EngineError::UnknownVariant {
                field: "sortBy",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for SortOrder {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(EngineError::UnknownVariant {
                field: "sortOrder",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_has_no_criteria() {
        let filter = HistoryFilter::default();
        assert!(filter.status.is_none());
        assert!(filter.start_date.is_none());
        assert!(filter.end_date.is_none());
        assert!(filter.min_profit.is_none());
        assert!(filter.max_profit.is_none());
        assert!(filter.sort_by.is_none());
        assert!(filter.sort_order.is_none());
    }

    #[test]
    fn sort_field_uses_camel_case_wire_values() {
        assert_eq!(
            serde_json::to_string(&SortField::ExecutionTime).unwrap(),
            "\"executionTime\""
        );
        assert_eq!(
            "executionTime".parse::<SortField>().unwrap(),
            SortField::ExecutionTime
        );
        assert!(matches!(
            "gasUsed".parse::<SortField>(),
            Err(EngineError::UnknownVariant { field: "sortBy", .. })
        ));
    }

    #[test]
    fn sort_order_parses_both_directions() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
    }

    #[test]
    fn filter_deserializes_from_dashboard_query_json() {
        let filter: HistoryFilter = serde_json::from_str(
            r#"{"status":"completed","minProfit":"100","sortBy":"profit","sortOrder":"desc"}"#,
        )
        .unwrap();
        assert_eq!(filter.status, Some(ArbitrageStatus::Completed));
        assert_eq!(filter.min_profit, Some(rust_decimal_macros::dec!(100)));
        assert_eq!(filter.sort_by, Some(SortField::Profit));
        assert_eq!(filter.sort_order, Some(SortOrder::Desc));
        assert!(filter.start_date.is_none());
    }
}
