//! Tests for fund ranking and recommendation rules.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use crate::funds::{AssetAllocation, Fund, InMemoryFundRepository};
    use crate::profiling::RiskProfile;
    use crate::recommendation::{
        rank_funds, recommended_asset_allocation, RecommendationService,
        RecommendationServiceTrait, TargetAllocation,
    };

    fn fund(id: &str, category: &str, risk_level: RiskProfile, returns_3y: f64) -> Fund {
        Fund {
            id: id.to_string(),
            name: format!("Fund {}", id),
            category: category.to_string(),
            risk_level,
            returns_1y: None,
            returns_3y,
            returns_5y: None,
            sharpe_ratio: None,
            beta: None,
            alpha: None,
            expense_ratio: None,
            fund_manager: None,
            fund_house: None,
            aum: None,
            rating: None,
            min_investment: None,
            exit_load: None,
            asset_allocation: AssetAllocation::new(dec!(0), dec!(0), dec!(0)),
        }
    }

    /// A 20-fund catalog with exactly 6 Growth-labelled funds; the rest are
    /// Balanced/Conservative, some in equity categories eligible for
    /// Growth backfill.
    fn twenty_fund_catalog() -> Vec<Fund> {
        let mut catalog = vec![
            fund("g01", "Small Cap Equity", RiskProfile::Growth, 26.8),
            fund("g02", "Mid Cap Equity", RiskProfile::Growth, 22.3),
            fund("g03", "Sectoral - Technology", RiskProfile::Growth, 24.8),
            fund("g04", "Large Cap Equity", RiskProfile::Growth, 18.5),
            fund("g05", "Large Cap Equity", RiskProfile::Growth, 17.5),
            fund("g06", "ELSS", RiskProfile::Growth, 19.3),
            // Equity-category funds without the Growth label; backfill pool.
            fund("b01", "Multi Cap Equity", RiskProfile::Balanced, 16.9),
            fund("b02", "Large Cap Equity", RiskProfile::Balanced, 15.8),
            fund("b03", "Aggressive Hybrid", RiskProfile::Balanced, 15.2),
            fund("b04", "Balanced Hybrid", RiskProfile::Balanced, 14.2),
            fund("b05", "Balanced Hybrid", RiskProfile::Balanced, 13.8),
        ];
        for i in 0..9 {
            catalog.push(fund(
                &format!("c{:02}", i),
                "Corporate Bond",
                RiskProfile::Conservative,
                6.0 + i as f64 * 0.2,
            ));
        }
        catalog
    }

    #[test]
    fn test_growth_ranking_with_backfill_scenario() {
        let catalog = twenty_fund_catalog();
        let result = rank_funds(Some(RiskProfile::Growth), &catalog, 8);

        assert_eq!(result.len(), 8);

        // The six Growth funds first, in descending 3Y order...
        let lead: Vec<&str> = result[..6].iter().map(|f| f.id.as_str()).collect();
        assert_eq!(lead, vec!["g01", "g03", "g02", "g06", "g04", "g05"]);

        // ...then the two best equity-category funds as backfill.
        let tail: Vec<&str> = result[6..].iter().map(|f| f.id.as_str()).collect();
        assert_eq!(tail, vec!["b01", "b02"]);

        // No duplicates across the whole list.
        let ids: HashSet<&str> = result.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), result.len());
    }

    #[test]
    fn test_result_is_capped_by_limit_and_catalog() {
        let catalog = twenty_fund_catalog();
        assert_eq!(rank_funds(Some(RiskProfile::Growth), &catalog, 3).len(), 3);
        assert!(rank_funds(Some(RiskProfile::Balanced), &catalog, 50).len() <= catalog.len());
    }

    #[test]
    fn test_no_profile_returns_top_performers_overall() {
        let catalog = twenty_fund_catalog();
        let result = rank_funds(None, &catalog, 3);
        let ids: Vec<&str> = result.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["g01", "g03", "g02"]);
    }

    #[test]
    fn test_ties_break_by_ascending_fund_id() {
        let catalog = vec![
            fund("z", "Large Cap Equity", RiskProfile::Growth, 15.0),
            fund("a", "Large Cap Equity", RiskProfile::Growth, 15.0),
            fund("m", "Large Cap Equity", RiskProfile::Growth, 15.0),
        ];
        let result = rank_funds(Some(RiskProfile::Growth), &catalog, 8);
        let ids: Vec<&str> = result.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "m", "z"]);
    }

    #[test]
    fn test_empty_catalog_yields_empty_recommendation() {
        assert!(rank_funds(Some(RiskProfile::Conservative), &[], 8).is_empty());
        assert!(rank_funds(None, &[], 8).is_empty());
    }

    #[test]
    fn test_backfill_never_crosses_into_unrelated_categories() {
        // One Conservative fund plus equity-only leftovers: nothing should
        // be backfilled for Conservative from equity categories.
        let catalog = vec![
            fund("c1", "Gilt", RiskProfile::Conservative, 8.0),
            fund("g1", "Small Cap Equity", RiskProfile::Growth, 25.0),
            fund("g2", "Mid Cap Equity", RiskProfile::Growth, 24.0),
        ];
        let result = rank_funds(Some(RiskProfile::Conservative), &catalog, 8);
        let ids: Vec<&str> = result.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["c1"]);
    }

    #[test]
    fn test_catalog_is_not_mutated() {
        let catalog = twenty_fund_catalog();
        let before = catalog.clone();
        let _ = rank_funds(Some(RiskProfile::Growth), &catalog, 8);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_service_recommends_through_repository() {
        let repository =
            Arc::new(InMemoryFundRepository::new(twenty_fund_catalog()).unwrap());
        let service = RecommendationService::new(repository);

        let result = service.recommend_default(Some(RiskProfile::Growth)).unwrap();
        assert_eq!(result.len(), 8);
        assert_eq!(result[0].id, "g01");
    }

    #[test]
    fn test_target_allocation_midpoints() {
        assert_eq!(
            recommended_asset_allocation(Some(RiskProfile::Conservative)),
            TargetAllocation {
                equity: 15,
                debt: 80,
                hybrid: 5
            }
        );
        assert_eq!(
            recommended_asset_allocation(Some(RiskProfile::Balanced)),
            TargetAllocation {
                equity: 50,
                debt: 50,
                hybrid: 0
            }
        );
        assert_eq!(
            recommended_asset_allocation(Some(RiskProfile::Growth)),
            TargetAllocation {
                equity: 85,
                debt: 15,
                hybrid: 0
            }
        );
        assert_eq!(
            recommended_asset_allocation(None),
            TargetAllocation {
                equity: 60,
                debt: 30,
                hybrid: 10
            }
        );
    }
}
