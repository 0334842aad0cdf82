//! Bounded, session-owned storage of saved comparison scenarios.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::estimate::EstimationResult;
use crate::payroll::PayrollInput;

/// Maximum number of scenarios a session may hold side by side.
pub const MAX_SCENARIOS: usize = 3;

/// One saved comparison unit: assignment input plus the estimate it
/// produced. Immutable once stored; only removal or a bulk clear discards
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioData {
    pub name: String,
    pub input_data: PayrollInput,
    pub result: EstimationResult,
    /// Which model produced the estimate, display-only provenance
    pub model_name: String,
    pub timestamp: DateTime<Utc>,
}

/// Ordered scenario collection, capped at MAX_SCENARIOS.
///
/// One store per user session. Server deployments create an instance per
/// session key; instances are never shared across sessions.
#[derive(Debug, Clone, Default)]
pub struct ScenarioStore {
    entries: Vec<ScenarioData>,
}

impl ScenarioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scenario, preserving insertion order.
    ///
    /// Returns false without mutating when the store is already full. The
    /// cap is a recoverable condition the caller surfaces with a
    /// remediation path (remove one first), not an error.
    pub fn add(&mut self, scenario: ScenarioData) -> bool {
        if self.entries.len() >= MAX_SCENARIOS {
            return false;
        }
        self.entries.push(scenario);
        true
    }

    /// Remove the scenario at `index`; later entries shift down.
    ///
    /// Out-of-range indices are a benign no-op: UI indices may race with
    /// refreshed state.
    pub fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    /// Saved scenarios in insertion order.
    pub fn scenarios(&self) -> &[ScenarioData] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Default display name for a scenario, e.g. "Germany (36mo)".
///
/// Truncation for renderer-specific limits (spreadsheet sheet names) is
/// the renderer's concern.
pub fn auto_name(input: &PayrollInput) -> String {
    format!("{} ({}mo)", input.host_country, input.duration_months)
}
