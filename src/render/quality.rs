//! Quality report display

use colored::{ColoredString, Colorize};

use crate::evaluator::{Grade, QualityCategory, QualityReport};

use super::heading;

pub fn grade_indicator(grade: Grade) -> ColoredString {
    let letter = grade.as_str();
    match grade {
        Grade::A => letter.green().bold(),
        Grade::B => letter.bright_green().bold(),
        Grade::C => letter.yellow().bold(),
        Grade::D => letter.bright_red().bold(),
        Grade::F => letter.red().bold(),
    }
}

fn score_bar(score: u32) -> String {
    let filled = (score.min(100) / 10) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

pub fn render_quality(report: &QualityReport) -> String {
    let mut output = heading("Quality");

    output.push_str(&format!(
        "Score: {}/100  Grade: {}\n\n",
        report.score.to_string().bold(),
        grade_indicator(report.grade)
    ));

    let rows = [
        (QualityCategory::Clarity, report.breakdown.clarity),
        (QualityCategory::Dependencies, report.breakdown.dependencies),
        (QualityCategory::Feasibility, report.breakdown.feasibility),
    ];
    for (category, score) in rows {
        output.push_str(&format!(
            "  {:<13} {} {score:>3}\n",
            category.to_string(),
            score_bar(score)
        ));
    }

    if !report.issues.is_empty() {
        output.push_str("\nIssues:\n");
        for issue in &report.issues {
            let story = issue
                .story_id
                .as_deref()
                .map(|id| format!("{id}: "))
                .unwrap_or_default();
            output.push_str(&format!(
                "  [{}] {story}{} {}\n      → {}\n",
                issue.category,
                issue.issue,
                format!("(-{})", issue.impact).dimmed(),
                issue.suggestion
            ));
        }
    }

    output
}
