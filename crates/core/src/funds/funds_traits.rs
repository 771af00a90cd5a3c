use crate::errors::Result;
use crate::funds::funds_model::{Fund, FundQuery};
use crate::profiling::RiskProfile;

/// Read-only access to the fund catalog. The catalog is assumed validated
/// and stable for the duration of any single call.
pub trait FundRepositoryTrait: Send + Sync {
    fn list_funds(&self) -> Result<Vec<Fund>>;
    fn list_funds_by_risk_level(&self, risk_level: RiskProfile) -> Result<Vec<Fund>>;
    fn get_fund(&self, fund_id: &str) -> Result<Fund>;
}

/// Trait for fund catalog service operations.
pub trait FundServiceTrait: Send + Sync {
    fn get_funds(&self) -> Result<Vec<Fund>>;
    fn get_funds_by_risk_level(&self, risk_level: RiskProfile) -> Result<Vec<Fund>>;
    fn get_fund(&self, fund_id: &str) -> Result<Fund>;
    fn search_funds(&self, query: &FundQuery) -> Result<Vec<Fund>>;
}
