//! Funds module - catalog models, repository traits, and services.

mod funds_catalog;
mod funds_model;
mod funds_repository;
mod funds_service;
mod funds_traits;


// Re-export the public interface
pub use funds_catalog::seed_catalog;
pub use funds_model::{AssetAllocation, Fund, FundQuery};
pub use funds_repository::InMemoryFundRepository;
pub use funds_service::FundService;
pub use funds_traits::{FundRepositoryTrait, FundServiceTrait};
