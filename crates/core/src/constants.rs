use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default number of funds returned by the recommender.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 8;

/// A fully allocated portfolio, in percent.
pub const FULL_ALLOCATION: Decimal = dec!(100);

/// Maximum aggregate equity exposure for a Conservative profile before a
/// consistency warning is raised (exclusive).
pub const CONSERVATIVE_MAX_EQUITY: i32 = 40;

/// Minimum aggregate equity exposure expected of a Growth profile
/// (exclusive lower bound for the warning).
pub const GROWTH_MIN_EQUITY: i32 = 70;
