//! Validation result types

use serde::{Deserialize, Serialize};

use crate::prd::Story;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Stable machine-readable identifier for a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    InvalidJson,
    InvalidFormat,
    MissingField,
    InvalidType,
    MissingRecommendedField,
    EmptyStories,
    InvalidStoryType,
    DuplicateStoryId,
    InvalidCodebase,
    EmptyAcceptanceCriteria,
    InvalidCriterionType,
    ShortCriterion,
    InvalidPriorityType,
    PriorityOutOfRange,
    InvalidDependenciesType,
    ShortTitle,
    ShortDescription,
    MissingDependency,
    CircularDependency,
    DeepDependencyChain,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::InvalidJson => "INVALID_JSON",
            IssueCode::InvalidFormat => "INVALID_FORMAT",
            IssueCode::MissingField => "MISSING_FIELD",
            IssueCode::InvalidType => "INVALID_TYPE",
            IssueCode::MissingRecommendedField => "MISSING_RECOMMENDED_FIELD",
            IssueCode::EmptyStories => "EMPTY_STORIES",
            IssueCode::InvalidStoryType => "INVALID_STORY_TYPE",
            IssueCode::DuplicateStoryId => "DUPLICATE_STORY_ID",
            IssueCode::InvalidCodebase => "INVALID_CODEBASE",
            IssueCode::EmptyAcceptanceCriteria => "EMPTY_ACCEPTANCE_CRITERIA",
            IssueCode::InvalidCriterionType => "INVALID_CRITERION_TYPE",
            IssueCode::ShortCriterion => "SHORT_CRITERION",
            IssueCode::InvalidPriorityType => "INVALID_PRIORITY_TYPE",
            IssueCode::PriorityOutOfRange => "PRIORITY_OUT_OF_RANGE",
            IssueCode::InvalidDependenciesType => "INVALID_DEPENDENCIES_TYPE",
            IssueCode::ShortTitle => "SHORT_TITLE",
            IssueCode::ShortDescription => "SHORT_DESCRIPTION",
            IssueCode::MissingDependency => "MISSING_DEPENDENCY",
            IssueCode::CircularDependency => "CIRCULAR_DEPENDENCY",
            IssueCode::DeepDependencyChain => "DEEP_DEPENDENCY_CHAIN",
        }
    }
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation finding with its location in the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// JSONPath-style pointer, e.g. `$.userStories[2].title`
    pub path: String,
    pub code: IssueCode,
    pub message: String,
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub(crate) fn from_findings(findings: Findings) -> Self {
        Self {
            is_valid: findings.errors.is_empty(),
            errors: findings.errors,
            warnings: findings.warnings,
        }
    }

    /// Report holding one fatal error and nothing else
    pub(crate) fn fatal(path: &str, code: IssueCode, message: impl Into<String>) -> Self {
        let mut findings = Findings::default();
        findings.error(path, code, message);
        Self::from_findings(findings)
    }

    pub fn has_error(&self, code: IssueCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    pub fn has_warning(&self, code: IssueCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// A document that passed validation, with its typed stories.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedPrd {
    pub stories: Vec<Story>,
    /// Non-blocking findings from the validation pass
    pub warnings: Vec<ValidationIssue>,
}

/// Accumulates errors and warnings in discovery order.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl Findings {
    pub fn error(&mut self, path: &str, code: IssueCode, message: impl Into<String>) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            code,
            message: message.into(),
            severity: Severity::Error,
        });
    }

    pub fn warning(&mut self, path: &str, code: IssueCode, message: impl Into<String>) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            code,
            message: message.into(),
            severity: Severity::Warning,
        });
    }
}
