//! Portfolio aggregation and the advisory checks around it.
//!
//! All three operations are pure. Rule findings are returned as values,
//! never as errors: an advisor is usually mid-edit when a portfolio is
//! under- or over-allocated.

use log::debug;
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::allocation_model::{
    AllocationTotal, ConsistencyWarning, PortfolioAllocation, WeightedFund,
};
use crate::constants::{CONSERVATIVE_MAX_EQUITY, FULL_ALLOCATION, GROWTH_MIN_EQUITY};
use crate::profiling::RiskProfile;

/// Weights each fund's own internal composition by its share of the
/// portfolio and sums the buckets. Buckets round half-away-from-zero,
/// each independently. An empty selection, or one whose weights sum to
/// zero, aggregates to all zeroes.
pub fn aggregate(selections: &[WeightedFund]) -> PortfolioAllocation {
    let mut equity = Decimal::ZERO;
    let mut debt = Decimal::ZERO;
    let mut cash = Decimal::ZERO;
    let mut total_weight = Decimal::ZERO;

    for selection in selections {
        let weight = selection.allocation / FULL_ALLOCATION;
        equity += selection.fund.asset_allocation.equity * weight;
        debt += selection.fund.asset_allocation.debt * weight;
        cash += selection.fund.asset_allocation.cash * weight;
        total_weight += selection.allocation;
    }

    if total_weight.is_zero() {
        return PortfolioAllocation::default();
    }

    let result = PortfolioAllocation {
        equity: round_percent(equity),
        debt: round_percent(debt),
        cash: round_percent(cash),
    };
    debug!(
        "Aggregated {} selections into {}/{}/{} (equity/debt/cash)",
        selections.len(),
        result.equity,
        result.debt,
        result.cash
    );
    result
}

/// Sums the per-fund allocation percentages; valid only at exactly 100.
pub fn check_total_allocation(selections: &[WeightedFund]) -> AllocationTotal {
    let total: Decimal = selections.iter().map(|s| s.allocation).sum();
    AllocationTotal {
        total,
        is_valid: total == FULL_ALLOCATION,
    }
}

/// Flags an aggregate equity exposure that conflicts with the declared
/// risk profile. Balanced carries no band: a deliberate permissive
/// default, not an oversight.
pub fn check_consistency(
    allocation: &PortfolioAllocation,
    profile: RiskProfile,
) -> Option<ConsistencyWarning> {
    match profile {
        RiskProfile::Conservative if allocation.equity > CONSERVATIVE_MAX_EQUITY => {
            Some(ConsistencyWarning::ExcessEquity {
                equity: allocation.equity,
                ceiling: CONSERVATIVE_MAX_EQUITY,
            })
        }
        RiskProfile::Growth if allocation.equity < GROWTH_MIN_EQUITY => {
            Some(ConsistencyWarning::InsufficientEquity {
                equity: allocation.equity,
                floor: GROWTH_MIN_EQUITY,
            })
        }
        _ => None,
    }
}

fn round_percent(value: Decimal) -> i32 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
        .unwrap_or(0)
}
