//! Quality evaluation result types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityCategory {
    Clarity,
    Dependencies,
    Feasibility,
}

impl std::fmt::Display for QualityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            QualityCategory::Clarity => "clarity",
            QualityCategory::Dependencies => "dependencies",
            QualityCategory::Feasibility => "feasibility",
        };
        f.write_str(name)
    }
}

/// An actionable quality finding.
///
/// `impact` is informational: category scores are computed from the
/// unrounded deductions, not by summing impacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityIssue {
    pub category: QualityCategory,
    /// `None` for document-level issues
    pub story_id: Option<String>,
    pub issue: String,
    pub suggestion: String,
    pub impact: u32,
}

/// Per-category scores, each 0-100
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityBreakdown {
    pub clarity: u32,
    pub dependencies: u32,
    pub feasibility: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => Grade::A,
            80..=89 => Grade::B,
            70..=79 => Grade::C,
            60..=69 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityReport {
    pub score: u32,
    pub grade: Grade,
    pub issues: Vec<QualityIssue>,
    pub breakdown: QualityBreakdown,
}

impl QualityReport {
    /// Worst-case report for input that cannot be scored at all
    pub(crate) fn failed(issue: &str, suggestion: &str) -> Self {
        Self {
            score: 0,
            grade: Grade::F,
            issues: vec![QualityIssue {
                category: QualityCategory::Clarity,
                story_id: None,
                issue: issue.to_string(),
                suggestion: suggestion.to_string(),
                impact: 100,
            }],
            breakdown: QualityBreakdown::default(),
        }
    }

    pub fn issues_in(&self, category: QualityCategory) -> impl Iterator<Item = &QualityIssue> {
        self.issues.iter().filter(move |i| i.category == category)
    }
}

/// Running score for one category.
///
/// Starts at 100; deductions are kept as floats until the end, where the
/// score is rounded half-to-even and clamped at 0.
#[derive(Debug)]
pub(crate) struct CategoryScore {
    category: QualityCategory,
    score: f64,
    issues: Vec<QualityIssue>,
}

impl CategoryScore {
    pub fn new(category: QualityCategory) -> Self {
        Self {
            category,
            score: 100.0,
            issues: Vec::new(),
        }
    }

    pub fn deduct(
        &mut self,
        amount: f64,
        story_id: Option<&str>,
        issue: impl Into<String>,
        suggestion: impl Into<String>,
    ) {
        self.score -= amount;
        let issue = issue.into();
        tracing::trace!(category = %self.category, ?story_id, amount, %issue, "deduction");
        self.issues.push(QualityIssue {
            category: self.category,
            story_id: story_id.map(str::to_string),
            issue,
            suggestion: suggestion.into(),
            impact: round_half_even(amount.max(0.0)) as u32,
        });
    }

    pub fn finish(self) -> (u32, Vec<QualityIssue>) {
        let score = round_half_even(self.score).max(0.0) as u32;
        (score, self.issues)
    }
}

pub(crate) fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}
