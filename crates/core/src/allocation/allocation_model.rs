//! Portfolio allocation models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::funds::Fund;

/// One selected fund weighted by its share of the client's total
/// investable amount, in percent.
#[derive(Debug, Clone, Copy)]
pub struct WeightedFund<'a> {
    pub fund: &'a Fund,
    pub allocation: Decimal,
}

impl<'a> WeightedFund<'a> {
    pub fn new(fund: &'a Fund, allocation: Decimal) -> Self {
        Self { fund, allocation }
    }
}

/// Aggregate equity/debt/cash exposure of a curated portfolio, in integer
/// percent. Each bucket is rounded independently, so the three values may
/// sum to 99-101; the drift is deliberate and must not be normalized away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAllocation {
    pub equity: i32,
    pub debt: i32,
    pub cash: i32,
}

/// Result of the total-weight check: the numeric total is always surfaced
/// so the UI can say "total allocation is 85%, expected 100%".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationTotal {
    pub total: Decimal,
    pub is_valid: bool,
}

/// Advisory finding that the aggregate equity exposure conflicts with the
/// declared risk profile. Never blocks saving or sharing; advisors may
/// intentionally override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ConsistencyWarning {
    /// Equity above the ceiling for a Conservative profile.
    ExcessEquity { equity: i32, ceiling: i32 },
    /// Equity below the floor expected of a Growth profile.
    InsufficientEquity { equity: i32, floor: i32 },
}

impl fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyWarning::ExcessEquity { equity, ceiling } => write!(
                f,
                "High equity allocation ({}%) for conservative profile (expected at most {}%). \
                 Consider reducing equity exposure.",
                equity, ceiling
            ),
            ConsistencyWarning::InsufficientEquity { equity, floor } => write!(
                f,
                "Low equity allocation ({}%) for growth profile (expected at least {}%). \
                 Consider increasing equity exposure.",
                equity, floor
            ),
        }
    }
}
