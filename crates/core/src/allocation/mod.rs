//! Allocation module - portfolio aggregation and advisory checks.

mod allocation_model;
mod allocation_service;


// Re-export the public interface
pub use allocation_model::{
    AllocationTotal, ConsistencyWarning, PortfolioAllocation, WeightedFund,
};
pub use allocation_service::{aggregate, check_consistency, check_total_allocation};
