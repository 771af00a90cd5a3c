//! Fund ranking and the recommendation service.

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use super::recommendation_model::ProfileRules;
use crate::constants::DEFAULT_RECOMMENDATION_LIMIT;
use crate::errors::Result;
use crate::funds::{Fund, FundRepositoryTrait};
use crate::profiling::RiskProfile;

/// Trait for recommendation service operations.
pub trait RecommendationServiceTrait: Send + Sync {
    /// Recommends up to `limit` funds for the profile, or the top performers
    /// across the whole catalog when no profile is known yet.
    fn recommend(&self, profile: Option<RiskProfile>, limit: usize) -> Result<Vec<Fund>>;

    fn recommend_default(&self, profile: Option<RiskProfile>) -> Result<Vec<Fund>> {
        self.recommend(profile, DEFAULT_RECOMMENDATION_LIMIT)
    }
}

/// Ranks the catalog for a risk profile. Pure: the catalog is never
/// mutated, and identical inputs produce identical output.
///
/// Primary rule: exact `risk_level` match, sorted by 3-year return
/// descending with ties broken by ascending fund id. When that yields fewer
/// than `limit` funds, the shortfall is backfilled from the profile's
/// preferred secondary categories under the same ordering, never repeating
/// a fund id. Without a profile, the top `limit` funds overall are
/// returned.
pub fn rank_funds(profile: Option<RiskProfile>, catalog: &[Fund], limit: usize) -> Vec<Fund> {
    let Some(profile) = profile else {
        return top_by_returns(catalog.iter(), limit);
    };

    let mut recommended = top_by_returns(
        catalog.iter().filter(|f| f.risk_level == profile),
        limit,
    );

    if recommended.len() < limit {
        let rules = ProfileRules::for_profile(profile);
        let chosen: HashSet<&str> = recommended.iter().map(|f| f.id.as_str()).collect();
        let backfill = top_by_returns(
            catalog
                .iter()
                .filter(|f| !chosen.contains(f.id.as_str()))
                .filter(|f| rules.prefers_category(&f.category)),
            limit - recommended.len(),
        );
        recommended.extend(backfill);
    }

    recommended
}

fn top_by_returns<'a>(funds: impl Iterator<Item = &'a Fund>, limit: usize) -> Vec<Fund> {
    let mut ranked: Vec<&Fund> = funds.collect();
    ranked.sort_by(|a, b| {
        b.returns_3y
            .total_cmp(&a.returns_3y)
            .then_with(|| a.id.cmp(&b.id))
    });
    ranked.into_iter().take(limit).cloned().collect()
}

/// Service wiring the pure ranking to the injected fund catalog.
pub struct RecommendationService {
    repository: Arc<dyn FundRepositoryTrait>,
}

impl RecommendationService {
    pub fn new(repository: Arc<dyn FundRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl RecommendationServiceTrait for RecommendationService {
    fn recommend(&self, profile: Option<RiskProfile>, limit: usize) -> Result<Vec<Fund>> {
        let catalog = self.repository.list_funds()?;
        debug!(
            "Recommending up to {} funds from a catalog of {} for {:?}",
            limit,
            catalog.len(),
            profile
        );
        Ok(rank_funds(profile, &catalog, limit))
    }
}
