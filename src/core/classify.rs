//! Suite classification.
//!
//! Reduces a suite's raw case outcomes to one of three statuses for the
//! rendered summary. Classification is pure; it is recomputed on every
//! render and never persisted.

use crate::core::report::TestSuite;

/// Overall status of one library's suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteStatus {
    /// Every recorded case failed. With the install stage recorded first,
    /// this is the library that never got past installation.
    FullyFailed,
    /// At least one case failed, but not all.
    PartiallyFailed,
    /// No case failed.
    Passed,
}

impl SuiteStatus {
    /// The status cell rendered in the detail table.
    pub fn label(&self) -> &'static str {
        match self {
            SuiteStatus::FullyFailed => ":stop_sign: Failed to install",
            SuiteStatus::PartiallyFailed => ":warning: Failed",
            SuiteStatus::Passed => ":white_check_mark: OK",
        }
    }
}

/// A suite reduced to its summary row.
#[derive(Debug, Clone)]
pub struct ClassifiedSuite {
    pub name: String,
    pub version: String,
    pub status: SuiteStatus,
    pub passed: usize,
    pub failed: usize,
}

/// Classify one suite from its raw pass/fail counts.
///
/// Counting rules, kept bit-for-bit from the established report pipeline:
/// a fully-failed suite always reports `passed = 0, failed = 1`, and a
/// partially-failed suite reports `passed = total - failed - 1` (the
/// failing stage is not itself a pass-eligible remaining case). A suite
/// with no cases at all counts as fully failed.
pub fn classify(suite: &TestSuite) -> ClassifiedSuite {
    let total = suite.total();
    let failed = suite.failed_count();

    let (status, passed, failed) = if total == failed {
        (SuiteStatus::FullyFailed, 0, 1)
    } else if failed > 0 {
        (SuiteStatus::PartiallyFailed, total - failed - 1, failed)
    } else {
        (SuiteStatus::Passed, total, 0)
    };

    ClassifiedSuite {
        name: suite.name.clone(),
        version: suite.version.clone(),
        status,
        passed,
        failed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::TestCase;

    fn suite_with(name: &str, outcomes: &[bool]) -> TestSuite {
        let mut suite = TestSuite::new(name, "1.0.0");
        for (i, &ok) in outcomes.iter().enumerate() {
            let case_name = format!("stage {i}");
            suite.record(if ok {
                TestCase::passed(case_name, "")
            } else {
                TestCase::failed(case_name, "")
            });
        }
        suite
    }

    #[test]
    fn test_all_passed() {
        let c = classify(&suite_with("Foo", &[true, true]));
        assert_eq!(c.status, SuiteStatus::Passed);
        assert_eq!(c.passed, 2);
        assert_eq!(c.failed, 0);
    }

    #[test]
    fn test_single_passed_case_is_passed() {
        // Install succeeded, no headers found: one passing case, no more.
        let c = classify(&suite_with("Foo", &[true]));
        assert_eq!(c.status, SuiteStatus::Passed);
        assert_eq!(c.passed, 1);
    }

    #[test]
    fn test_lone_install_failure_is_fully_failed() {
        let c = classify(&suite_with("Bar", &[false]));
        assert_eq!(c.status, SuiteStatus::FullyFailed);
        assert_eq!(c.passed, 0);
        assert_eq!(c.failed, 1);
    }

    #[test]
    fn test_fully_failed_counts_are_fixed() {
        // Multiple failed cases still render as a single install failure.
        let c = classify(&suite_with("Bar", &[false, false]));
        assert_eq!(c.status, SuiteStatus::FullyFailed);
        assert_eq!(c.passed, 0);
        assert_eq!(c.failed, 1);
    }

    #[test]
    fn test_partial_failure_counting_rule() {
        // passed = total - failed - 1: the failing stage is not counted
        // among the remaining pass-eligible cases.
        let c = classify(&suite_with("Baz", &[true, false]));
        assert_eq!(c.status, SuiteStatus::PartiallyFailed);
        assert_eq!(c.passed, 0);
        assert_eq!(c.failed, 1);

        let c = classify(&suite_with("Baz", &[true, true, false]));
        assert_eq!(c.passed, 1);
        assert_eq!(c.failed, 1);
    }

    #[test]
    fn test_empty_suite_is_fully_failed() {
        let c = classify(&suite_with("Ghost", &[]));
        assert_eq!(c.status, SuiteStatus::FullyFailed);
        assert_eq!(c.passed, 0);
        assert_eq!(c.failed, 1);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let suite = suite_with("Foo", &[true, false]);
        let first = classify(&suite);
        let second = classify(&suite);
        assert_eq!(first.status, second.status);
        assert_eq!(first.passed, second.passed);
        assert_eq!(first.failed, second.failed);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SuiteStatus::Passed.label(), ":white_check_mark: OK");
        assert_eq!(SuiteStatus::PartiallyFailed.label(), ":warning: Failed");
        assert_eq!(
            SuiteStatus::FullyFailed.label(),
            ":stop_sign: Failed to install"
        );
    }
}
