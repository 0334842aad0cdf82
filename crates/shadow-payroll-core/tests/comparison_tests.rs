use chrono::Utc;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use shadow_payroll_core::comparison::{
    build_comparison, compare_scenarios, judge_comparison, summarize_scenarios,
};
use shadow_payroll_core::estimate::{CostLineItem, EstimationResult};
use shadow_payroll_core::payroll::PayrollInput;
use shadow_payroll_core::store::{auto_name, ScenarioData, ScenarioStore, MAX_SCENARIOS};
use shadow_payroll_core::taxonomy::{normalize_line_items, CanonicalCategory};
use shadow_payroll_core::Money;

fn item(label: &str, amount_usd: Decimal) -> CostLineItem {
    CostLineItem {
        label: label.to_string(),
        amount_usd,
        amount_local: amount_usd,
        local_currency: "USD".to_string(),
        is_range: false,
        range_low_usd: None,
        range_high_usd: None,
        range_disclaimer: None,
    }
}

fn scenario(name: &str, items: Vec<CostLineItem>, total_usd: Decimal) -> ScenarioData {
    ScenarioData {
        name: name.to_string(),
        input_data: PayrollInput {
            home_country: "United States".to_string(),
            host_country: name.to_string(),
            salary_usd: dec!(300_000),
            duration_months: 12,
            has_spouse: false,
            num_children: 0,
            housing_usd: dec!(0),
            school_usd: dec!(0),
        },
        result: EstimationResult {
            line_items: items,
            total_employer_cost_usd: total_usd,
            total_employer_cost_local: total_usd,
            local_currency: "USD".to_string(),
            overall_rating: None,
            item_ratings: vec![],
            pe_risk: None,
            insights: String::new(),
        },
        model_name: "gpt-4o".to_string(),
        timestamp: Utc::now(),
    }
}

// ===========================================================================
// Normalization properties
// ===========================================================================

#[test]
fn test_total_conservation_under_normalization() {
    // Bucket totals equal the raw line-item total exactly: nothing lost,
    // nothing double-counted, every item in exactly one bucket.
    let result = EstimationResult {
        line_items: vec![
            item("Income Tax", dec!(123_456.78)),
            item("Ganancias", dec!(1_000.22)),
            item("Aportes Employee", dec!(30_000)),
            item("Employer Contributions", dec!(45_000)),
            item("Visa and Immigration Fees", dec!(4_200.50)),
            item("Relocation Shipping", dec!(7_800)),
        ],
        total_employer_cost_usd: dec!(500_000),
        total_employer_cost_local: dec!(500_000),
        local_currency: "USD".to_string(),
        overall_rating: None,
        item_ratings: vec![],
        pe_risk: None,
        insights: String::new(),
    };
    let raw_total: Money = result.line_items.iter().map(|i| i.amount_usd).sum();
    let breakdown = normalize_line_items(&result).unwrap();
    let bucket_total: Money = breakdown.buckets.values().copied().sum();
    assert_eq!(bucket_total, raw_total);
}

#[test]
fn test_normalization_is_idempotent_across_runs() {
    let labels = ["Income Tax", "irpf", "PE Setup", "Unseen Label"];
    let first: Vec<CanonicalCategory> =
        labels.iter().map(|l| CanonicalCategory::from_label(l)).collect();
    let second: Vec<CanonicalCategory> =
        labels.iter().map(|l| CanonicalCategory::from_label(l)).collect();
    assert_eq!(first, second);
}

// ===========================================================================
// Matrix builder properties
// ===========================================================================

#[test]
fn test_spec_example_spanish_english_collapse() {
    let scenarios = vec![
        scenario(
            "Argentina (12mo)",
            vec![
                item("Income Tax", dec!(10_000)),
                item("Aportes Employee", dec!(5_000)),
            ],
            dec!(15_000),
        ),
        scenario(
            "Germany (12mo)",
            vec![
                item("Income Tax", dec!(12_000)),
                item("Employee Contributions", dec!(4_000)),
            ],
            dec!(16_000),
        ),
    ];
    let built = build_comparison(&scenarios).unwrap();
    assert_eq!(
        built.labels,
        vec![
            CanonicalCategory::IncomeTax,
            CanonicalCategory::SocialSecurityEmployee,
        ]
    );
    assert_eq!(
        built.matrix,
        vec![
            vec![dec!(10_000), dec!(5_000)],
            vec![dec!(12_000), dec!(4_000)],
        ]
    );
}

#[test]
fn test_ordered_labels_are_taxonomy_subsequence() {
    let scenarios = vec![
        scenario(
            "A",
            vec![item("Other Costs", dec!(100)), item("Housing", dec!(200))],
            dec!(300),
        ),
        scenario(
            "B",
            vec![item("Schooling", dec!(50)), item("Income Tax", dec!(900))],
            dec!(950),
        ),
    ];
    let built = build_comparison(&scenarios).unwrap();

    // Every returned label appears in ALL, in the same relative order.
    let mut positions = built
        .labels
        .iter()
        .map(|l| CanonicalCategory::ALL.iter().position(|c| c == l).unwrap());
    let mut previous = positions.next().unwrap();
    for position in positions {
        assert!(position > previous);
        previous = position;
    }

    // Categories present nowhere are omitted entirely: no all-zero rows.
    assert!(!built.labels.contains(&CanonicalCategory::PeAdministration));
}

#[test]
fn test_matrix_rectangularity_and_zero_fill() {
    let scenarios = vec![
        scenario("A", vec![item("Income Tax", dec!(1_000))], dec!(1_000)),
        scenario("B", vec![item("Housing", dec!(2_000))], dec!(2_000)),
        scenario("C", vec![], dec!(0)),
    ];
    let built = build_comparison(&scenarios).unwrap();
    assert_eq!(built.matrix.len(), 3);
    for row in &built.matrix {
        assert_eq!(row.len(), built.labels.len());
    }
    // Scenario C contributed no items; its whole row is zeros.
    assert!(built.matrix[2].iter().all(|v| *v == Money::ZERO));
}

#[test]
fn test_rebuild_yields_identical_output() {
    let scenarios = vec![
        scenario(
            "A",
            vec![item("Income Tax", dec!(10_000)), item("Misc Fees", dec!(123))],
            dec!(10_123),
        ),
        scenario("B", vec![item("Rent Allowance", dec!(9_000))], dec!(9_000)),
    ];
    let first = build_comparison(&scenarios).unwrap();
    let second = build_comparison(&scenarios).unwrap();
    assert_eq!(first.labels, second.labels);
    assert_eq!(first.matrix, second.matrix);
}

// ===========================================================================
// Store properties
// ===========================================================================

#[test]
fn test_fourth_add_fails_and_leaves_store_unchanged() {
    let mut store = ScenarioStore::new();
    assert!(store.add(scenario("A", vec![], dec!(1))));
    assert!(store.add(scenario("B", vec![], dec!(2))));
    assert!(store.add(scenario("C", vec![], dec!(3))));

    assert!(!store.add(scenario("D", vec![], dec!(4))));

    assert_eq!(store.len(), MAX_SCENARIOS);
    let names: Vec<&str> = store.scenarios().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    let totals: Vec<Money> = store
        .scenarios()
        .iter()
        .map(|s| s.result.total_employer_cost_usd)
        .collect();
    assert_eq!(totals, vec![dec!(1), dec!(2), dec!(3)]);
}

#[test]
fn test_remove_index_five_from_two_element_store_is_noop() {
    let mut store = ScenarioStore::new();
    store.add(scenario("A", vec![], dec!(1)));
    store.add(scenario("B", vec![], dec!(2)));
    store.remove(5);
    assert_eq!(store.len(), 2);
    let names: Vec<&str> = store.scenarios().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn test_auto_name_convention() {
    let s = scenario("x", vec![], dec!(0));
    // Host country was set to the scenario name "x" by the fixture.
    assert_eq!(auto_name(&s.input_data), "x (12mo)");
}

// ===========================================================================
// Judgment properties
// ===========================================================================

#[test]
fn test_two_tied_minimum_totals_mark_both_never_one() {
    let scenarios = vec![
        scenario("A", vec![item("Income Tax", dec!(1))], dec!(15_000)),
        scenario("B", vec![item("Income Tax", dec!(2))], dec!(20_000)),
        scenario("C", vec![item("Income Tax", dec!(3))], dec!(15_000)),
    ];
    let built = build_comparison(&scenarios).unwrap();
    let judgment = judge_comparison(&built, &scenarios);
    // No scenario is uniquely cheapest; both holders of 15,000 are marked.
    assert_eq!(judgment.cheapest_indices, vec![0, 2]);
    assert_eq!(judgment.most_expensive_indices, vec![1]);
}

#[test]
fn test_all_equal_rows_and_totals_mark_nothing() {
    let scenarios = vec![
        scenario("A", vec![item("Income Tax", dec!(5_000))], dec!(30_000)),
        scenario("B", vec![item("Income Tax", dec!(5_000))], dec!(30_000)),
        scenario("C", vec![item("Income Tax", dec!(5_000))], dec!(30_000)),
    ];
    let built = build_comparison(&scenarios).unwrap();
    let judgment = judge_comparison(&built, &scenarios);
    assert!(judgment.rows[0].min_indices.is_empty());
    assert!(judgment.rows[0].max_indices.is_empty());
    assert!(judgment.cheapest_indices.is_empty());
    assert!(judgment.most_expensive_indices.is_empty());
}

#[test]
fn test_totals_are_authoritative_not_column_sums() {
    // Scenario A's items sum to 10,000 but its authoritative total is
    // 40,000 (range-only items are excluded from the matrix); judgment
    // must rank by the result object's total.
    let scenarios = vec![
        scenario("A", vec![item("Income Tax", dec!(10_000))], dec!(40_000)),
        scenario("B", vec![item("Income Tax", dec!(30_000))], dec!(35_000)),
    ];
    let built = build_comparison(&scenarios).unwrap();
    let judgment = judge_comparison(&built, &scenarios);
    assert_eq!(judgment.totals, vec![dec!(40_000), dec!(35_000)]);
    assert_eq!(judgment.cheapest_indices, vec![1]);
}

#[test]
fn test_summary_below_two_scenarios_is_skipped() {
    assert!(summarize_scenarios(&[]).is_none());
    assert!(summarize_scenarios(&[scenario("A", vec![], dec!(1))]).is_none());
}

#[test]
fn test_report_consistency_across_consumers() {
    // The bundled report carries the same matrix and judgment any
    // renderer would get from the individual calls.
    let scenarios = vec![
        scenario("A", vec![item("Income Tax", dec!(10_000))], dec!(50_000)),
        scenario("B", vec![item("Income Tax", dec!(12_000))], dec!(60_000)),
    ];
    let report = compare_scenarios(&scenarios).unwrap();
    let built = build_comparison(&scenarios).unwrap();
    let judgment = judge_comparison(&built, &scenarios);

    assert_eq!(report.labels, built.labels);
    assert_eq!(report.matrix, built.matrix);
    assert_eq!(report.judgment.totals, judgment.totals);
    assert_eq!(report.judgment.cheapest_indices, judgment.cheapest_indices);
    assert_eq!(report.summary.unwrap().cheapest, "A");
}

#[test]
fn test_malformed_scenario_fails_comparison_loudly() {
    let mut bad = scenario("A", vec![item("Income Tax", dec!(10_000))], dec!(10_000));
    bad.result.line_items[0].is_range = true; // bounds missing
    let scenarios = vec![bad, scenario("B", vec![], dec!(5_000))];
    assert!(build_comparison(&scenarios).is_err());
}
