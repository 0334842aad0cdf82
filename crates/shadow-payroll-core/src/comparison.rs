//! Multi-scenario comparison: the label-aligned cost matrix and the
//! extremal judgments derived from it.
//!
//! Renderers (screen table, spreadsheet sheet, PDF chart) format exactly
//! what this module returns and never recompute normalization themselves,
//! so all presentation surfaces agree.

use serde::{Deserialize, Serialize};

use crate::store::ScenarioData;
use crate::taxonomy::{self, CanonicalCategory};
use crate::types::Money;
use crate::ShadowPayrollResult;

/// Rectangular, label-aligned view of several scenarios' cost breakdowns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    /// Canonical categories present in at least one scenario, in fixed
    /// taxonomy order. Categories present nowhere are omitted entirely.
    pub labels: Vec<CanonicalCategory>,
    /// Indexed `[scenario_idx][label_idx]`; pairs absent from a scenario
    /// are exact zero, never missing
    pub matrix: Vec<Vec<Money>>,
    pub warnings: Vec<String>,
}

/// Build the comparison matrix for an ordered sequence of scenarios.
///
/// Accepts any number of scenarios including zero; callers gate the
/// two-scenario comparison precondition themselves. Output is fully
/// deterministic: identical inputs yield identical labels and matrix.
pub fn build_comparison(scenarios: &[ScenarioData]) -> ShadowPayrollResult<ComparisonMatrix> {
    let mut scenario_buckets = Vec::with_capacity(scenarios.len());
    let mut unmatched = 0usize;
    for scenario in scenarios {
        let breakdown = taxonomy::normalize_line_items(&scenario.result)?;
        unmatched += breakdown.unmatched_labels;
        scenario_buckets.push(breakdown.buckets);
    }

    let labels: Vec<CanonicalCategory> = CanonicalCategory::ALL
        .into_iter()
        .filter(|category| scenario_buckets.iter().any(|b| b.contains_key(category)))
        .collect();

    let matrix: Vec<Vec<Money>> = scenario_buckets
        .iter()
        .map(|buckets| {
            labels
                .iter()
                .map(|category| buckets.get(category).copied().unwrap_or(Money::ZERO))
                .collect()
        })
        .collect();

    let mut warnings = Vec::new();
    if unmatched > 0 {
        warnings.push(format!(
            "{unmatched} line item label(s) outside the synonym table were routed to Other"
        ));
    }

    Ok(ComparisonMatrix {
        labels,
        matrix,
        warnings,
    })
}

/// Tie-aware extrema for one matrix row.
///
/// Every scenario holding the extremum is listed. When all values in the
/// row are equal there are no extrema and both lists are empty; ties are
/// never marked in only one direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowExtrema {
    pub category: CanonicalCategory,
    pub min_indices: Vec<usize>,
    pub max_indices: Vec<usize>,
}

/// Extremal facts consumers highlight and narrate from, derived once so
/// table, spreadsheet and chart never disagree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonJudgment {
    pub rows: Vec<RowExtrema>,
    /// Authoritative per-scenario totals (`total_employer_cost_usd` from
    /// each result object), never recomputed column sums
    pub totals: Vec<Money>,
    pub cheapest_indices: Vec<usize>,
    pub most_expensive_indices: Vec<usize>,
}

fn tie_aware_extrema(values: &[Money]) -> (Vec<usize>, Vec<usize>) {
    let Some(first) = values.first() else {
        return (Vec::new(), Vec::new());
    };
    let mut min = *first;
    let mut max = *first;
    for value in &values[1..] {
        if *value < min {
            min = *value;
        }
        if *value > max {
            max = *value;
        }
    }
    if min == max {
        return (Vec::new(), Vec::new());
    }
    let collect_equal = |target: Money| -> Vec<usize> {
        values
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == target)
            .map(|(index, _)| index)
            .collect()
    };
    (collect_equal(min), collect_equal(max))
}

/// Derive row and total extrema for a built matrix.
pub fn judge_comparison(
    matrix: &ComparisonMatrix,
    scenarios: &[ScenarioData],
) -> ComparisonJudgment {
    let rows = matrix
        .labels
        .iter()
        .enumerate()
        .map(|(label_idx, category)| {
            let column: Vec<Money> = matrix.matrix.iter().map(|row| row[label_idx]).collect();
            let (min_indices, max_indices) = tie_aware_extrema(&column);
            RowExtrema {
                category: *category,
                min_indices,
                max_indices,
            }
        })
        .collect();

    let totals: Vec<Money> = scenarios
        .iter()
        .map(|s| s.result.total_employer_cost_usd)
        .collect();
    let (cheapest_indices, most_expensive_indices) = tie_aware_extrema(&totals);

    ComparisonJudgment {
        rows,
        totals,
        cheapest_indices,
        most_expensive_indices,
    }
}

/// Plain-English judgment naming the cheapest and most expensive scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub cheapest: String,
    pub cheapest_total_usd: Money,
    pub most_expensive: String,
    pub most_expensive_total_usd: Money,
    pub text: String,
}

/// Summarize totals across scenarios.
///
/// Below two scenarios comparison is skipped entirely, so this returns
/// None; the threshold is a precondition, not an error. With every total
/// equal, the first scenario is named on both sides (no special "equal"
/// wording).
pub fn summarize_scenarios(scenarios: &[ScenarioData]) -> Option<ComparisonSummary> {
    if scenarios.len() < 2 {
        return None;
    }

    let mut cheapest = 0usize;
    let mut dearest = 0usize;
    for (index, scenario) in scenarios.iter().enumerate() {
        if scenario.result.total_employer_cost_usd
            < scenarios[cheapest].result.total_employer_cost_usd
        {
            cheapest = index;
        }
        if scenario.result.total_employer_cost_usd
            > scenarios[dearest].result.total_employer_cost_usd
        {
            dearest = index;
        }
    }

    let text = format!(
        "{} is the most cost-effective option. {} has the highest total employer cost.",
        scenarios[cheapest].name, scenarios[dearest].name
    );

    Some(ComparisonSummary {
        cheapest: scenarios[cheapest].name.clone(),
        cheapest_total_usd: scenarios[cheapest].result.total_employer_cost_usd,
        most_expensive: scenarios[dearest].name.clone(),
        most_expensive_total_usd: scenarios[dearest].result.total_employer_cost_usd,
        text,
    })
}

/// Everything a renderer needs for one comparison view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub scenario_names: Vec<String>,
    pub labels: Vec<CanonicalCategory>,
    pub matrix: Vec<Vec<Money>>,
    pub judgment: ComparisonJudgment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<ComparisonSummary>,
    pub warnings: Vec<String>,
}

/// Bundle matrix, judgment and summary for renderer consumption.
pub fn compare_scenarios(scenarios: &[ScenarioData]) -> ShadowPayrollResult<ComparisonReport> {
    let built = build_comparison(scenarios)?;
    let judgment = judge_comparison(&built, scenarios);
    let summary = summarize_scenarios(scenarios);
    let ComparisonMatrix {
        labels,
        matrix,
        warnings,
    } = built;

    Ok(ComparisonReport {
        scenario_names: scenarios.iter().map(|s| s.name.clone()).collect(),
        labels,
        matrix,
        judgment,
        summary,
        warnings,
    })
}
