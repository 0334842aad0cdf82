//! Permanent-establishment risk pre-screen.
//!
//! Duration-based banding against the 183-day convention, usable before
//! any estimator call. The estimator's own treaty-aware PE assessment
//! supersedes this screen when present.

use serde::{Deserialize, Serialize};

use crate::config::{DAYS_PER_MONTH, PE_RISK_THRESHOLD_DAYS};
use crate::types::RatingLevel;

/// Width of the Medium band past the threshold, in days.
const MEDIUM_BAND_DAYS: u32 = 90;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeRiskIndicator {
    pub duration_months: u32,
    pub duration_days: u32,
    pub threshold_days: u32,
    pub level: RatingLevel,
}

/// Band assignment duration against the default 183-day threshold.
pub fn assess_pe_risk(duration_months: u32) -> PeRiskIndicator {
    assess_pe_risk_with_threshold(duration_months, PE_RISK_THRESHOLD_DAYS)
}

/// Same banding against a treaty-specific day threshold.
pub fn assess_pe_risk_with_threshold(
    duration_months: u32,
    threshold_days: u32,
) -> PeRiskIndicator {
    let duration_days = duration_months * DAYS_PER_MONTH;
    let level = if duration_days < threshold_days {
        RatingLevel::Low
    } else if duration_days < threshold_days + MEDIUM_BAND_DAYS {
        RatingLevel::Medium
    } else {
        RatingLevel::High
    };
    PeRiskIndicator {
        duration_months,
        duration_days,
        threshold_days,
        level,
    }
}
