use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::ShadowPayrollError;
use crate::types::Money;
use crate::ShadowPayrollResult;

/// Assignment parameters for one shadow payroll estimate.
///
/// Read-only once saved into a scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollInput {
    pub home_country: String,
    pub host_country: String,
    /// Annual home base salary in USD
    pub salary_usd: Money,
    /// Assignment duration in months
    pub duration_months: u32,
    #[serde(default)]
    pub has_spouse: bool,
    #[serde(default)]
    pub num_children: u32,
    /// Annual housing allowance in USD
    #[serde(default)]
    pub housing_usd: Money,
    /// Annual school allowance in USD
    #[serde(default)]
    pub school_usd: Money,
}

impl PayrollInput {
    pub fn validate(&self) -> ShadowPayrollResult<()> {
        if self.home_country.trim().is_empty() {
            return Err(ShadowPayrollError::InvalidInput {
                field: "home_country".into(),
                reason: "Home country must not be empty".into(),
            });
        }
        if self.host_country.trim().is_empty() {
            return Err(ShadowPayrollError::InvalidInput {
                field: "host_country".into(),
                reason: "Host country must not be empty".into(),
            });
        }
        if self.salary_usd < config::MIN_SALARY_USD || self.salary_usd > config::MAX_SALARY_USD {
            return Err(ShadowPayrollError::InvalidInput {
                field: "salary_usd".into(),
                reason: format!(
                    "Salary must be between {} and {}",
                    config::MIN_SALARY_USD,
                    config::MAX_SALARY_USD
                ),
            });
        }
        if self.duration_months < config::MIN_DURATION_MONTHS
            || self.duration_months > config::MAX_DURATION_MONTHS
        {
            return Err(ShadowPayrollError::InvalidInput {
                field: "duration_months".into(),
                reason: format!(
                    "Duration must be between {} and {} months",
                    config::MIN_DURATION_MONTHS,
                    config::MAX_DURATION_MONTHS
                ),
            });
        }
        if self.num_children > config::MAX_DEPENDENT_CHILDREN {
            return Err(ShadowPayrollError::InvalidInput {
                field: "num_children".into(),
                reason: format!(
                    "At most {} dependent children supported",
                    config::MAX_DEPENDENT_CHILDREN
                ),
            });
        }
        for (field, amount) in [
            ("housing_usd", self.housing_usd),
            ("school_usd", self.school_usd),
        ] {
            if amount < config::MIN_BENEFIT_USD || amount > config::MAX_BENEFIT_USD {
                return Err(ShadowPayrollError::InvalidInput {
                    field: field.into(),
                    reason: format!(
                        "Benefit must be between {} and {}",
                        config::MIN_BENEFIT_USD,
                        config::MAX_BENEFIT_USD
                    ),
                });
            }
        }
        Ok(())
    }

    /// Combined annual benefits in USD.
    pub fn total_benefits_usd(&self) -> Money {
        self.housing_usd + self.school_usd
    }

    /// Approximate duration in days (30 days per month).
    pub fn duration_days(&self) -> u32 {
        self.duration_months * config::DAYS_PER_MONTH
    }
}
