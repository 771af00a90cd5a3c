//! Per-profile recommendation rules.

use serde::{Deserialize, Serialize};

use crate::profiling::RiskProfile;

/// Inclusive percentage band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub min: i32,
    pub max: i32,
}

impl Band {
    const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    fn midpoint(&self) -> i32 {
        (self.min + self.max) / 2
    }
}

/// Selection rules for one risk profile: the equity/debt bands a suitable
/// portfolio should land in, and the secondary categories the recommender
/// may backfill from when too few funds carry the profile's risk level.
#[derive(Debug, Clone, Copy)]
pub struct ProfileRules {
    pub equity: Band,
    pub debt: Band,
    pub preferred_categories: &'static [&'static str],
}

impl ProfileRules {
    pub fn for_profile(profile: RiskProfile) -> Self {
        match profile {
            RiskProfile::Conservative => ProfileRules {
                equity: Band::new(0, 30),
                debt: Band::new(60, 100),
                preferred_categories: &[
                    "Debt",
                    "Liquid Fund",
                    "Short Duration Bond",
                    "Balanced Hybrid",
                ],
            },
            RiskProfile::Balanced => ProfileRules {
                equity: Band::new(30, 70),
                debt: Band::new(30, 70),
                preferred_categories: &["Hybrid", "Balanced Advantage", "Dynamic Hybrid", "Equity"],
            },
            RiskProfile::Growth => ProfileRules {
                equity: Band::new(70, 100),
                debt: Band::new(0, 30),
                preferred_categories: &[
                    "Equity",
                    "Large Cap Equity",
                    "Multi Cap Equity",
                    "Mid Cap Equity",
                ],
            },
        }
    }

    /// Whether `category` matches one of the preferred secondary categories
    /// (case-insensitive substring).
    pub fn prefers_category(&self, category: &str) -> bool {
        let category = category.to_lowercase();
        self.preferred_categories
            .iter()
            .any(|preferred| category.contains(&preferred.to_lowercase()))
    }
}

/// Suggested top-level split of the client's investable amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetAllocation {
    pub equity: i32,
    pub debt: i32,
    pub hybrid: i32,
}

/// Target allocation for a profile: the midpoint of the profile's equity
/// and debt bands, with hybrid as the non-negative remainder. Without a
/// profile, a generic 60/30/10 starting point.
pub fn recommended_asset_allocation(profile: Option<RiskProfile>) -> TargetAllocation {
    let Some(profile) = profile else {
        return TargetAllocation {
            equity: 60,
            debt: 30,
            hybrid: 10,
        };
    };

    let rules = ProfileRules::for_profile(profile);
    let equity = rules.equity.midpoint();
    let debt = rules.debt.midpoint();
    TargetAllocation {
        equity,
        debt,
        hybrid: (100 - equity - debt).max(0),
    }
}
