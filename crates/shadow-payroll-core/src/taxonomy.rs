//! Canonical cost-category taxonomy and free-text label normalization.
//!
//! Estimator output is free text from a non-deterministic generator across
//! many countries and languages; a closed comparison table needs a small,
//! stable vocabulary. Labels are folded onto the canonical categories
//! through a curated synonym table (many-to-one, exact match after
//! case-fold and trim, no fuzzy matching). Labels the table does not know
//! land in the Other catch-all, so no cost is ever dropped.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::estimate::EstimationResult;
use crate::types::Money;
use crate::ShadowPayrollResult;

/// One entry of the fixed cost-line taxonomy.
///
/// Variant order is the canonical row order of every comparison table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum CanonicalCategory {
    #[serde(rename = "Income Tax")]
    IncomeTax,
    #[serde(rename = "Social Security - Employee")]
    SocialSecurityEmployee,
    #[serde(rename = "Social Security - Employer")]
    SocialSecurityEmployer,
    #[serde(rename = "PE Administration")]
    PeAdministration,
    #[serde(rename = "Housing Allowance")]
    HousingAllowance,
    #[serde(rename = "Education Allowance")]
    EducationAllowance,
    #[serde(rename = "Other")]
    Other,
}

impl CanonicalCategory {
    /// The taxonomy in canonical order.
    pub const ALL: [CanonicalCategory; 7] = [
        CanonicalCategory::IncomeTax,
        CanonicalCategory::SocialSecurityEmployee,
        CanonicalCategory::SocialSecurityEmployer,
        CanonicalCategory::PeAdministration,
        CanonicalCategory::HousingAllowance,
        CanonicalCategory::EducationAllowance,
        CanonicalCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalCategory::IncomeTax => "Income Tax",
            CanonicalCategory::SocialSecurityEmployee => "Social Security - Employee",
            CanonicalCategory::SocialSecurityEmployer => "Social Security - Employer",
            CanonicalCategory::PeAdministration => "PE Administration",
            CanonicalCategory::HousingAllowance => "Housing Allowance",
            CanonicalCategory::EducationAllowance => "Education Allowance",
            CanonicalCategory::Other => "Other",
        }
    }

    /// Synonym-table lookup after case-fold and trim.
    ///
    /// Returns None for labels the table does not know. The table is
    /// static and versioned with the crate; new estimator phrasings grow
    /// the Other bucket until a release adds them here.
    pub fn lookup(label: &str) -> Option<CanonicalCategory> {
        let key = label.trim().to_lowercase();
        match key.as_str() {
            "income tax"
            | "personal income tax"
            | "ganancias"
            | "impuesto a las ganancias"
            | "irpf"
            | "einkommensteuer" => Some(CanonicalCategory::IncomeTax),
            "social security - employee"
            | "social security employee"
            | "employee social security"
            | "aportes employee"
            | "employee contributions" => Some(CanonicalCategory::SocialSecurityEmployee),
            "social security - employer"
            | "social security employer"
            | "employer social security"
            | "contribuciones employer"
            | "employer contributions" => Some(CanonicalCategory::SocialSecurityEmployer),
            "pe administration" | "permanent establishment" | "pe admin" | "pe setup" => {
                Some(CanonicalCategory::PeAdministration)
            }
            "housing allowance" | "housing" | "rent allowance" => {
                Some(CanonicalCategory::HousingAllowance)
            }
            "education allowance" | "education" | "school allowance" | "schooling" => {
                Some(CanonicalCategory::EducationAllowance)
            }
            "other" | "miscellaneous" | "other costs" => Some(CanonicalCategory::Other),
            _ => None,
        }
    }

    /// Total mapping used by normalization: unmatched labels resolve to
    /// Other, never an error. Pure function of the table and the input.
    pub fn from_label(label: &str) -> CanonicalCategory {
        Self::lookup(label).unwrap_or(CanonicalCategory::Other)
    }
}

impl fmt::Display for CanonicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical USD buckets for one scenario.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBreakdown {
    /// Summed USD amount per canonical category present in the estimate.
    /// Keyed by the ordered enum, so iteration follows taxonomy order.
    pub buckets: BTreeMap<CanonicalCategory, Money>,
    /// How many raw labels missed the synonym table and fell into Other
    pub unmatched_labels: usize,
}

/// Fold an estimate's line items onto the canonical taxonomy.
///
/// Multiple raw labels mapping to one category are summed into its bucket,
/// never overwritten or averaged, so the bucket total conserves the line
/// item total. Malformed items are an upstream data-integrity fault and
/// fail the whole normalization.
pub fn normalize_line_items(
    result: &EstimationResult,
) -> ShadowPayrollResult<NormalizedBreakdown> {
    result.validate()?;

    let mut breakdown = NormalizedBreakdown::default();
    for item in &result.line_items {
        let category = match CanonicalCategory::lookup(&item.label) {
            Some(category) => category,
            None => {
                breakdown.unmatched_labels += 1;
                CanonicalCategory::Other
            }
        };
        *breakdown.buckets.entry(category).or_insert(Money::ZERO) += item.amount_usd;
    }
    Ok(breakdown)
}
