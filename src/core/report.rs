//! Test report model.
//!
//! One `TestSuite` per library, one `TestCase` per stage attempted. The
//! report is an explicit value threaded through the pipeline and persisted
//! as JSON between the check and summary steps; nothing accumulates in
//! ambient global state.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Outcome of a single stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseOutcome {
    Passed,
    Failed,
}

/// One pass/fail outcome for one stage of one library, with the combined
/// stdout+stderr the stage produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub outcome: CaseOutcome,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub output: String,
}

impl TestCase {
    /// Record a passing stage.
    pub fn passed(name: impl Into<String>, output: impl Into<String>) -> Self {
        TestCase {
            name: name.into(),
            outcome: CaseOutcome::Passed,
            output: output.into(),
        }
    }

    /// Record a failing stage.
    pub fn failed(name: impl Into<String>, output: impl Into<String>) -> Self {
        TestCase {
            name: name.into(),
            outcome: CaseOutcome::Failed,
            output: output.into(),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.outcome == CaseOutcome::Failed
    }
}

/// The collected stage outcomes for one library at one version.
///
/// Created when the library's processing starts; cases are appended as
/// stages execute; the suite joins the report when processing ends,
/// whether by completion, short-circuit, or an unexpected error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSuite {
    pub name: String,
    pub version: String,
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    /// Open a suite for one library release.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        TestSuite {
            name: name.into(),
            version: version.into(),
            cases: Vec::new(),
        }
    }

    /// Append a stage outcome.
    pub fn record(&mut self, case: TestCase) {
        self.cases.push(case);
    }

    pub fn total(&self) -> usize {
        self.cases.len()
    }

    pub fn failed_count(&self) -> usize {
        self.cases.iter().filter(|c| c.is_failed()).count()
    }
}

/// The full report for one shard: one suite per library processed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestReport {
    pub suites: Vec<TestSuite>,
}

impl TestReport {
    pub fn new() -> Self {
        TestReport::default()
    }

    /// Attach a finalized suite.
    pub fn add_suite(&mut self, suite: TestSuite) {
        self.suites.push(suite);
    }

    /// Load a report document from a file. A malformed document is fatal
    /// to the caller (the summary step), not to any other part of the run.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report file: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse report file: {}", path.display()))
    }

    /// Write the report document to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        std::fs::write(path, text)
            .with_context(|| format!("failed to write report file: {}", path.display()))
    }
}
