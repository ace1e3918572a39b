//! Report summarization and Markdown rendering.
//!
//! Turns a collected report into the two tables posted to the CI job
//! summary: overall suite counts and a per-library detail table.

use std::fmt::Write as _;

use crate::core::classify::{classify, ClassifiedSuite, SuiteStatus};
use crate::core::report::TestReport;

/// A report reduced to its rendered form: sorted detail rows plus
/// per-status suite counts. Counts count suites, never individual cases.
#[derive(Debug, Clone)]
pub struct Summary {
    pub rows: Vec<ClassifiedSuite>,
    pub passed: usize,
    pub failed: usize,
    pub install_failed: usize,
}

/// Classify every suite and order the detail rows by status, then by
/// library name case-insensitively.
pub fn summarize(report: &TestReport) -> Summary {
    let mut rows: Vec<ClassifiedSuite> = report.suites.iter().map(classify).collect();

    let mut passed = 0;
    let mut failed = 0;
    let mut install_failed = 0;
    for row in &rows {
        match row.status {
            SuiteStatus::Passed => passed += 1,
            SuiteStatus::PartiallyFailed => failed += 1,
            SuiteStatus::FullyFailed => install_failed += 1,
        }
    }

    rows.sort_by(|a, b| {
        (a.status.label(), a.name.to_lowercase()).cmp(&(b.status.label(), b.name.to_lowercase()))
    });

    Summary {
        rows,
        passed,
        failed,
        install_failed,
    }
}

/// Render the summary as GitHub-flavored Markdown.
pub fn render_markdown(summary: &Summary) -> String {
    let mut out = String::new();

    out.push_str("# Summary\n");
    out.push_str(&render_table(
        &["OK", "Failed", "Failed to install"],
        &[vec![
            summary.passed.to_string(),
            summary.failed.to_string(),
            summary.install_failed.to_string(),
        ]],
    ));

    out.push_str("# Details\n");
    let rows: Vec<Vec<String>> = summary
        .rows
        .iter()
        .map(|row| {
            vec![
                row.name.clone(),
                row.version.clone(),
                row.status.label().to_string(),
                row.passed.to_string(),
                row.failed.to_string(),
            ]
        })
        .collect();
    out.push_str(&render_table(
        &["Library", "Version", "Status", "Passed", "Failed"],
        &rows,
    ));

    out
}

/// Render one aligned GitHub-style table.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();

    let render_row = |out: &mut String, cells: &[String]| {
        for (i, cell) in cells.iter().enumerate() {
            write!(out, "| {:<width$} ", cell, width = widths[i]).expect("writing to String");
        }
        out.push_str("|\n");
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    render_row(&mut out, &header_cells);

    for &width in &widths {
        write!(out, "|{}", "-".repeat(width + 2)).expect("writing to String");
    }
    out.push_str("|\n");

    for row in rows {
        render_row(&mut out, row);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::{TestCase, TestSuite};

    fn report_fixture() -> TestReport {
        let mut report = TestReport::new();

        let mut ok = TestSuite::new("zeta", "1.0.0");
        ok.record(TestCase::passed("Install library", ""));
        ok.record(TestCase::passed("Compile with discovered headers", ""));
        report.add_suite(ok);

        let mut broken = TestSuite::new("Alpha", "2.0.0");
        broken.record(TestCase::passed("Install library", ""));
        broken.record(TestCase::failed("Compile with discovered headers", ""));
        report.add_suite(broken);

        let mut uninstallable = TestSuite::new("Mu", "0.1.0");
        uninstallable.record(TestCase::failed("Install library", ""));
        report.add_suite(uninstallable);

        report
    }

    #[test]
    fn test_counts_count_suites_not_cases() {
        let summary = summarize(&report_fixture());
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.install_failed, 1);
    }

    #[test]
    fn test_rows_sorted_by_status_then_name() {
        let summary = summarize(&report_fixture());
        let names: Vec<&str> = summary.rows.iter().map(|r| r.name.as_str()).collect();
        // Install failures sort first, then failures, then OK.
        assert_eq!(names, vec!["Mu", "Alpha", "zeta"]);
    }

    #[test]
    fn test_name_ordering_is_case_insensitive() {
        let mut report = TestReport::new();
        for name in ["beta", "Alpha", "Gamma"] {
            let mut suite = TestSuite::new(name, "1.0.0");
            suite.record(TestCase::passed("Install library", ""));
            report.add_suite(suite);
        }

        let summary = summarize(&report);
        let names: Vec<&str> = summary.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn test_render_markdown_structure() {
        let rendered = render_markdown(&summarize(&report_fixture()));

        assert!(rendered.starts_with("# Summary\n"));
        assert!(rendered.contains("# Details\n"));
        assert!(rendered.contains("| OK"));
        assert!(rendered.contains("| Failed to install"));
        assert!(rendered.contains("| Library"));
        assert!(rendered.contains(":stop_sign: Failed to install"));
        assert!(rendered.contains(":warning: Failed"));
        assert!(rendered.contains(":white_check_mark: OK"));

        // Detail rows keep the sorted order in the rendered output.
        let mu = rendered.find("| Mu").unwrap();
        let alpha = rendered.find("| Alpha").unwrap();
        let zeta = rendered.find("| zeta").unwrap();
        assert!(mu < alpha && alpha < zeta);
    }

    #[test]
    fn test_render_empty_report() {
        let rendered = render_markdown(&summarize(&TestReport::new()));
        assert!(rendered.contains("| 0"));
        assert!(rendered.contains("| Library"));
    }

    #[test]
    fn test_table_columns_align() {
        let table = render_table(&["A", "Longer"], &[vec!["xx".to_string(), "y".to_string()]]);
        assert_eq!(table, "| A  | Longer |\n|----|--------|\n| xx | y      |\n");
    }
}
