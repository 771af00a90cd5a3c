use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use super::proposals_model::ClientProposal;
use crate::allocation::{
    aggregate, check_consistency, check_total_allocation, AllocationTotal, ConsistencyWarning,
    PortfolioAllocation,
};
use crate::errors::Result;
use crate::funds::FundRepositoryTrait;
use crate::profiling::RiskProfile;

/// Everything the curation screen needs to show about a proposal's current
/// state, computed in one call. Warnings are data: the advisor may save
/// and share regardless.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalReview {
    pub allocation: PortfolioAllocation,
    pub total: AllocationTotal,
    pub warning: Option<ConsistencyWarning>,
}

/// Trait for proposal curation operations.
pub trait ProposalServiceTrait: Send + Sync {
    /// Builds a proposal from catalog fund ids, in the given order.
    fn curate(&self, client_id: &str, advisor_id: &str, fund_ids: &[&str])
        -> Result<ClientProposal>;

    /// Reviews a proposal's aggregate allocation against the client's
    /// declared profile (when known).
    fn review(&self, proposal: &ClientProposal, profile: Option<RiskProfile>) -> ProposalReview;
}

/// Service for assembling and reviewing client proposals.
pub struct ProposalService {
    fund_repository: Arc<dyn FundRepositoryTrait>,
}

impl ProposalService {
    pub fn new(fund_repository: Arc<dyn FundRepositoryTrait>) -> Self {
        Self { fund_repository }
    }
}

impl ProposalServiceTrait for ProposalService {
    fn curate(
        &self,
        client_id: &str,
        advisor_id: &str,
        fund_ids: &[&str],
    ) -> Result<ClientProposal> {
        let mut proposal = ClientProposal::new(client_id, advisor_id);
        for fund_id in fund_ids {
            let fund = self.fund_repository.get_fund(fund_id)?;
            proposal.add_fund(fund);
        }
        debug!(
            "Curated proposal {} with {} funds for client {}",
            proposal.id,
            proposal.curated_funds.len(),
            client_id
        );
        Ok(proposal)
    }

    fn review(&self, proposal: &ClientProposal, profile: Option<RiskProfile>) -> ProposalReview {
        let selections = proposal.weighted_selections();
        let allocation = aggregate(&selections);
        let total = check_total_allocation(&selections);
        let warning = profile.and_then(|p| check_consistency(&allocation, p));
        ProposalReview {
            allocation,
            total,
            warning,
        }
    }
}
