use std::sync::Arc;

use log::debug;

use super::funds_model::{Fund, FundQuery};
use super::funds_traits::{FundRepositoryTrait, FundServiceTrait};
use crate::errors::Result;
use crate::profiling::RiskProfile;

/// Service for reading and filtering the fund catalog.
pub struct FundService {
    repository: Arc<dyn FundRepositoryTrait>,
}

impl FundService {
    pub fn new(repository: Arc<dyn FundRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl FundServiceTrait for FundService {
    fn get_funds(&self) -> Result<Vec<Fund>> {
        self.repository.list_funds()
    }

    fn get_funds_by_risk_level(&self, risk_level: RiskProfile) -> Result<Vec<Fund>> {
        self.repository.list_funds_by_risk_level(risk_level)
    }

    fn get_fund(&self, fund_id: &str) -> Result<Fund> {
        self.repository.get_fund(fund_id)
    }

    /// Evaluates the curation-screen filters against the catalog snapshot.
    fn search_funds(&self, query: &FundQuery) -> Result<Vec<Fund>> {
        let funds = self.repository.list_funds()?;
        let matches: Vec<Fund> = funds.into_iter().filter(|f| query.matches(f)).collect();
        debug!("Fund search matched {} funds", matches.len());
        Ok(matches)
    }
}
