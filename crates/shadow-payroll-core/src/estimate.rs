//! Structured estimate data as returned by the external country estimator.
//!
//! The estimator is an LLM-backed collaborator and its labels are free
//! text; the only hard numeric dependencies downstream are `amount_usd`
//! on each line item and `total_employer_cost_usd` on the result.
//! Violated invariants fail loudly here: silently zeroing cost data would
//! corrupt comparisons in a way the user cannot detect.

use serde::{Deserialize, Serialize};

use crate::error::ShadowPayrollError;
use crate::types::{Money, RatingLevel};
use crate::ShadowPayrollResult;

/// One cost component of an estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostLineItem {
    /// Free-text category name as produced by the estimator
    pub label: String,
    pub amount_usd: Money,
    pub amount_local: Money,
    /// ISO 4217 code for amount_local
    pub local_currency: String,
    /// When true, amount_usd is indicative and the range bounds apply
    #[serde(default)]
    pub is_range: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_low_usd: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_high_usd: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_disclaimer: Option<String>,
}

impl CostLineItem {
    fn validate(&self, index: usize) -> ShadowPayrollResult<()> {
        if self.amount_usd < Money::ZERO {
            return Err(ShadowPayrollError::MalformedLineItem {
                index,
                reason: format!("amount_usd must be non-negative, got {}", self.amount_usd),
            });
        }
        if self.amount_local < Money::ZERO {
            return Err(ShadowPayrollError::MalformedLineItem {
                index,
                reason: format!("amount_local must be non-negative, got {}", self.amount_local),
            });
        }
        if self.is_range {
            let (low, high) = match (self.range_low_usd, self.range_high_usd) {
                (Some(low), Some(high)) => (low, high),
                _ => {
                    return Err(ShadowPayrollError::MalformedLineItem {
                        index,
                        reason: "range item is missing range_low_usd/range_high_usd".into(),
                    })
                }
            };
            if low < Money::ZERO || low > high {
                return Err(ShadowPayrollError::MalformedLineItem {
                    index,
                    reason: format!("range bounds must satisfy 0 <= low <= high, got {low}..{high}"),
                });
            }
        }
        Ok(())
    }
}

/// Benchmark rating against the host region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostRating {
    pub level: RatingLevel,
    pub region_name: String,
    pub typical_range_low_usd: Money,
    pub typical_range_high_usd: Money,
}

/// Per-item rating for the key cost components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRating {
    pub item_label: String,
    pub level: RatingLevel,
    pub context: String,
}

/// The estimator's permanent-establishment judgment for the country pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeRiskAssessment {
    pub level: RatingLevel,
    /// PE day threshold for this home/host pair
    pub threshold_days: u32,
    pub treaty_exists: bool,
    pub exceeds_threshold: bool,
    #[serde(default)]
    pub mitigation: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// The full estimator output for one assignment scenario.
///
/// Line items are not unique by label; duplicates are summed during
/// normalization, never overwritten. Rating and PE-risk sub-objects are
/// opaque to the comparison engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationResult {
    pub line_items: Vec<CostLineItem>,
    /// Authoritative scenario total; comparison never substitutes a
    /// recomputed column sum for it
    pub total_employer_cost_usd: Money,
    pub total_employer_cost_local: Money,
    pub local_currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_rating: Option<CostRating>,
    #[serde(default)]
    pub item_ratings: Vec<ItemRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pe_risk: Option<PeRiskAssessment>,
    #[serde(default)]
    pub insights: String,
}

impl EstimationResult {
    pub fn validate(&self) -> ShadowPayrollResult<()> {
        for (index, item) in self.line_items.iter().enumerate() {
            item.validate(index)?;
        }
        if self.total_employer_cost_usd < Money::ZERO {
            return Err(ShadowPayrollError::InvalidInput {
                field: "total_employer_cost_usd".into(),
                reason: "Total employer cost must be non-negative".into(),
            });
        }
        if self.total_employer_cost_local < Money::ZERO {
            return Err(ShadowPayrollError::InvalidInput {
                field: "total_employer_cost_local".into(),
                reason: "Total employer cost must be non-negative".into(),
            });
        }
        Ok(())
    }
}
