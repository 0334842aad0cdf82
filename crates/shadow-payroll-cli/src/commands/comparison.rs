use chrono::{DateTime, Utc};
use clap::Args;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shadow_payroll_core::comparison;
use shadow_payroll_core::estimate::EstimationResult;
use shadow_payroll_core::payroll::PayrollInput;
use shadow_payroll_core::store::{self, ScenarioData, ScenarioStore, MAX_SCENARIOS};
use shadow_payroll_core::taxonomy::{self, CanonicalCategory};
use shadow_payroll_core::Money;

use crate::input;

/// Arguments for single-estimate normalization
#[derive(Args)]
pub struct NormalizeArgs {
    /// Path to JSON input file holding one estimation result
    #[arg(long)]
    pub input: Option<String>,
}

#[derive(Debug, Serialize)]
struct BucketEntry {
    category: CanonicalCategory,
    amount_usd: Money,
}

#[derive(Debug, Serialize)]
struct NormalizeOutput {
    /// Canonical buckets in taxonomy order
    buckets: Vec<BucketEntry>,
    total_usd: Money,
    /// Labels that missed the synonym table and fell into Other
    unmatched_labels: usize,
}

pub fn run_normalize(args: NormalizeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let result: EstimationResult = input::load(&args.input, "normalization")?;
    let breakdown = taxonomy::normalize_line_items(&result)?;

    let total_usd = breakdown.buckets.values().copied().sum();
    let buckets = breakdown
        .buckets
        .iter()
        .map(|(category, amount)| BucketEntry {
            category: *category,
            amount_usd: *amount,
        })
        .collect();

    Ok(serde_json::to_value(NormalizeOutput {
        buckets,
        total_usd,
        unmatched_labels: breakdown.unmatched_labels,
    })?)
}

/// Arguments for the scenario comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to JSON input file holding an array of scenario specs
    #[arg(long)]
    pub input: Option<String>,
}

/// A scenario as supplied on the command line. Name and provenance are
/// optional and filled the way the UI save flow fills them.
#[derive(Debug, Deserialize)]
struct ScenarioSpec {
    #[serde(default)]
    name: Option<String>,
    input_data: PayrollInput,
    result: EstimationResult,
    #[serde(default)]
    model_name: Option<String>,
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let specs: Vec<ScenarioSpec> = input::load(&args.input, "scenario comparison")?;

    let mut store = ScenarioStore::new();
    let mut warnings: Vec<String> = Vec::new();
    for spec in specs {
        let scenario = ScenarioData {
            name: spec
                .name
                .unwrap_or_else(|| store::auto_name(&spec.input_data)),
            input_data: spec.input_data,
            result: spec.result,
            model_name: spec.model_name.unwrap_or_else(|| "unknown".to_string()),
            timestamp: spec.timestamp.unwrap_or_else(Utc::now),
        };
        if !store.add(scenario) {
            // Informative notice, not an error: the first MAX_SCENARIOS
            // scenarios are still compared.
            warnings.push(format!(
                "Maximum {MAX_SCENARIOS} scenarios reached; extra scenarios were ignored. Remove one to add another."
            ));
            break;
        }
    }

    let mut report = comparison::compare_scenarios(store.scenarios())?;
    report.warnings.extend(warnings);
    Ok(serde_json::to_value(report)?)
}
