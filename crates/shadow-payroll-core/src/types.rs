use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Exchange rates and ratios expressed as decimals. Never as percentages.
pub type Rate = Decimal;

/// Relative level shared by cost ratings and PE-risk assessments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatingLevel {
    Low,
    Medium,
    High,
}

impl RatingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingLevel::Low => "Low",
            RatingLevel::Medium => "Medium",
            RatingLevel::High => "High",
        }
    }
}

impl fmt::Display for RatingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exchange rate quote as delivered by the external rate provider.
///
/// Quotes are fetched and cached outside this crate; by the time the core
/// runs, the rate is an already-resolved value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FxRate {
    /// Units of host currency per USD
    pub rate: Rate,
    pub as_of: DateTime<Utc>,
    /// Provider name, display-only
    pub source: String,
}
