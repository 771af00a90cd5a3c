//! Recommendation module - profile rules and fund ranking.

mod recommendation_model;
mod recommendation_service;

#[cfg(test)]
mod recommendation_service_tests;

// Re-export the public interface
pub use recommendation_model::{recommended_asset_allocation, Band, ProfileRules, TargetAllocation};
pub use recommendation_service::{rank_funds, RecommendationService, RecommendationServiceTrait};
