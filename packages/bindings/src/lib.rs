use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use shadow_payroll_core::payroll::PayrollInput;
use shadow_payroll_core::store::ScenarioData;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Payroll
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct BaseCalcRequest {
    input: PayrollInput,
    fx_rate: Decimal,
}

#[napi]
pub fn base_calculation(request_json: String) -> NapiResult<String> {
    let request: BaseCalcRequest = serde_json::from_str(&request_json).map_err(to_napi_error)?;
    let base = shadow_payroll_core::calculations::calculate_base(&request.input, request.fx_rate)
        .map_err(to_napi_error)?;
    let summary = shadow_payroll_core::calculations::calculate_summary(&request.input, &base);
    serde_json::to_string(&summary).map_err(to_napi_error)
}

#[napi]
pub fn pe_risk_screen(duration_months: u32) -> NapiResult<String> {
    let indicator = shadow_payroll_core::pe_risk::assess_pe_risk(duration_months);
    serde_json::to_string(&indicator).map_err(to_napi_error)
}

#[napi]
pub fn auto_scenario_name(input_json: String) -> NapiResult<String> {
    let input: PayrollInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    Ok(shadow_payroll_core::store::auto_name(&input))
}

// ---------------------------------------------------------------------------
// Normalization and comparison
// ---------------------------------------------------------------------------

#[napi]
pub fn normalize_estimate(result_json: String) -> NapiResult<String> {
    let result: shadow_payroll_core::estimate::EstimationResult =
        serde_json::from_str(&result_json).map_err(to_napi_error)?;
    let breakdown =
        shadow_payroll_core::taxonomy::normalize_line_items(&result).map_err(to_napi_error)?;
    serde_json::to_string(&breakdown.buckets).map_err(to_napi_error)
}

#[napi]
pub fn build_comparison(scenarios_json: String) -> NapiResult<String> {
    let scenarios: Vec<ScenarioData> =
        serde_json::from_str(&scenarios_json).map_err(to_napi_error)?;
    let report = shadow_payroll_core::comparison::compare_scenarios(&scenarios)
        .map_err(to_napi_error)?;
    serde_json::to_string(&report).map_err(to_napi_error)
}

#[napi]
pub fn comparison_summary(scenarios_json: String) -> NapiResult<String> {
    let scenarios: Vec<ScenarioData> =
        serde_json::from_str(&scenarios_json).map_err(to_napi_error)?;
    let summary = shadow_payroll_core::comparison::summarize_scenarios(&scenarios);
    serde_json::to_string(&summary).map_err(to_napi_error)
}
