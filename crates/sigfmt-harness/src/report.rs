//! Conformance report rendering.

use serde::Serialize;

use crate::error::HarnessError;
use crate::runner::VerificationResult;

/// Aggregated outcome of one verification campaign.
#[derive(Debug, Clone, Serialize)]
pub struct ConformanceReport {
    pub campaign: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<VerificationResult>,
}

impl ConformanceReport {
    pub fn from_results(campaign: impl Into<String>, results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            campaign: campaign.into(),
            total,
            passed,
            failed: total - passed,
            results,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Human-readable markdown: a summary line plus a table of failures.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# Conformance report: {}\n\n", self.campaign));
        out.push_str(&format!(
            "{} cases, {} passed, {} failed\n\n",
            self.total, self.passed, self.failed
        ));
        if self.failed != 0 {
            out.push_str("| case | expected | actual |\n");
            out.push_str("|------|----------|--------|\n");
            for result in self.results.iter().filter(|r| !r.passed) {
                out.push_str(&format!(
                    "| {} | `{:?}` | `{:?}` |\n",
                    result.case_name, result.expected, result.actual
                ));
            }
        }
        out
    }

    /// Machine-readable JSON.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
