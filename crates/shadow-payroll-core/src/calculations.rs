//! Deterministic base payroll conversion.
//!
//! The part of the estimate that needs no estimator: converting annual USD
//! salary and benefits into monthly host-currency amounts at a given rate.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::ShadowPayrollError;
use crate::payroll::PayrollInput;
use crate::types::{Money, Rate};
use crate::ShadowPayrollResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Monthly host-currency breakdown of salary and benefits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseCalculation {
    pub salary_monthly_local: Money,
    pub benefits_monthly_local: Money,
    pub gross_monthly_local: Money,
    /// Exchange rate the conversion used
    pub fx_rate: Rate,
}

impl BaseCalculation {
    pub fn annual_gross_local(&self) -> Money {
        self.gross_monthly_local * MONTHS_PER_YEAR
    }
}

/// Convert annual USD amounts to monthly host-currency amounts.
///
/// Amounts are rounded to 2 decimal places.
pub fn calculate_base(input: &PayrollInput, fx_rate: Rate) -> ShadowPayrollResult<BaseCalculation> {
    input.validate()?;
    if fx_rate <= Decimal::ZERO {
        return Err(ShadowPayrollError::InvalidInput {
            field: "fx_rate".into(),
            reason: "Exchange rate must be positive".into(),
        });
    }

    let salary_monthly_local = (input.salary_usd / MONTHS_PER_YEAR * fx_rate).round_dp(2);
    let benefits_monthly_local =
        (input.total_benefits_usd() / MONTHS_PER_YEAR * fx_rate).round_dp(2);
    let gross_monthly_local = salary_monthly_local + benefits_monthly_local;

    Ok(BaseCalculation {
        salary_monthly_local,
        benefits_monthly_local,
        gross_monthly_local,
        fx_rate,
    })
}

/// Assignment-level roll-up of a base calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentSummary {
    pub duration_months: u32,
    pub duration_days: u32,
    pub salary_monthly_local: Money,
    pub benefits_monthly_local: Money,
    pub gross_monthly_local: Money,
    pub total_gross_assignment_local: Money,
    pub fx_rate: Rate,
}

pub fn calculate_summary(input: &PayrollInput, base: &BaseCalculation) -> AssignmentSummary {
    AssignmentSummary {
        duration_months: input.duration_months,
        duration_days: input.duration_days(),
        salary_monthly_local: base.salary_monthly_local,
        benefits_monthly_local: base.benefits_monthly_local,
        gross_monthly_local: base.gross_monthly_local,
        total_gross_assignment_local: base.gross_monthly_local
            * Decimal::from(input.duration_months),
        fx_rate: base.fx_rate,
    }
}
