//! Boundaries to the external estimation collaborators.
//!
//! The LLM-backed country estimator and the FX rate provider live outside
//! this crate; these traits are the shape the core consumes them through.
//! By the time the comparison engine runs, both have already resolved and
//! nothing here blocks on I/O.

use crate::estimate::EstimationResult;
use crate::payroll::PayrollInput;
use crate::types::FxRate;
use crate::ShadowPayrollResult;

/// Produces a structured annual cost estimate for one assignment.
///
/// Implementations may emit any label text and currency code; consumers
/// depend only on `amount_usd` per item and `total_employer_cost_usd`.
pub trait CostEstimator {
    fn estimate(
        &self,
        input: &PayrollInput,
        fx_rate: &FxRate,
    ) -> ShadowPayrollResult<EstimationResult>;
}

/// Supplies the USD exchange rate for a host-country currency.
pub trait FxRateSource {
    fn usd_rate(&self, currency: &str) -> ShadowPayrollResult<FxRate>;
}
