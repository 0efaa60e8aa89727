//! Validation report display

use colored::{ColoredString, Colorize};

use crate::validator::{Severity, ValidationIssue, ValidationReport};

use super::heading;

pub fn severity_indicator(severity: Severity) -> ColoredString {
    match severity {
        Severity::Error => "✗".red().bold(),
        Severity::Warning => "!".yellow().bold(),
    }
}

fn format_issue(issue: &ValidationIssue) -> String {
    format!(
        "  {} {} {}\n      at {}\n",
        severity_indicator(issue.severity),
        issue.code.as_str().bold(),
        issue.message,
        issue.path.dimmed()
    )
}

pub fn render_validation(report: &ValidationReport) -> String {
    let mut output = heading("Validation");

    let verdict = if report.is_valid {
        "PRD is valid".green().bold()
    } else {
        "PRD is invalid".red().bold()
    };
    output.push_str(&format!(
        "{verdict} ({} errors, {} warnings)\n",
        report.errors.len(),
        report.warnings.len()
    ));

    if !report.errors.is_empty() {
        output.push_str("\nErrors:\n");
        for issue in &report.errors {
            output.push_str(&format_issue(issue));
        }
    }

    if !report.warnings.is_empty() {
        output.push_str("\nWarnings:\n");
        for issue in &report.warnings {
            output.push_str(&format_issue(issue));
        }
    }

    output
}
