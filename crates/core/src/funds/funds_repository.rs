//! In-memory fund repository.
//!
//! The surrounding product ships with a static catalog; this repository
//! serves an immutable snapshot of it behind `FundRepositoryTrait` so the
//! scorer, recommender and allocator never reach into ambient state.

use rust_decimal_macros::dec;

use crate::errors::{Error, Result, ValidationError};
use crate::funds::funds_model::Fund;
use crate::funds::funds_traits::FundRepositoryTrait;
use crate::profiling::RiskProfile;

pub struct InMemoryFundRepository {
    funds: Vec<Fund>,
}

impl InMemoryFundRepository {
    /// Builds a repository over a validated snapshot. Rejects funds whose
    /// internal asset allocation exceeds 100%.
    pub fn new(funds: Vec<Fund>) -> Result<Self> {
        for fund in &funds {
            if fund.asset_allocation.total() > dec!(100) {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "asset allocation of fund '{}' sums to {}%, exceeding 100%",
                    fund.id,
                    fund.asset_allocation.total()
                ))));
            }
        }
        Ok(Self { funds })
    }

    /// Repository over the built-in seed catalog.
    pub fn with_seed_catalog() -> Self {
        Self {
            funds: crate::funds::funds_catalog::seed_catalog(),
        }
    }
}

impl FundRepositoryTrait for InMemoryFundRepository {
    fn list_funds(&self) -> Result<Vec<Fund>> {
        Ok(self.funds.clone())
    }

    fn list_funds_by_risk_level(&self, risk_level: RiskProfile) -> Result<Vec<Fund>> {
        Ok(self
            .funds
            .iter()
            .filter(|f| f.risk_level == risk_level)
            .cloned()
            .collect())
    }

    fn get_fund(&self, fund_id: &str) -> Result<Fund> {
        self.funds
            .iter()
            .find(|f| f.id == fund_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("fund '{}'", fund_id)))
    }
}
