//! PRD structural and referential validation
//!
//! Validation runs in order, each step possibly short-circuiting:
//! - JSON decoding (`INVALID_JSON`, `INVALID_FORMAT`)
//! - Top-level schema and recommended fields
//! - Per-story field checks in document order
//! - Dependency graph checks: dangling references, cycles, chain depth
//!
//! Errors block acceptance of the document; warnings never do.

mod dependencies;
mod story;
mod types;


use std::collections::HashSet;

use serde_json::Value;

use crate::config::ValidatorConfig;
use crate::prd::{DocumentError, PrdDocument, Story, RECOMMENDED_FIELDS, STORIES_FIELD};

pub use types::{AcceptedPrd, IssueCode, Severity, ValidationIssue, ValidationReport};

use story::{check_story, StoryContext};
use types::Findings;

/// Stateless PRD validator. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct PrdValidator {
    config: ValidatorConfig,
}

impl PrdValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a PRD.
    ///
    /// `codebases` is the allow-list for each story's `repo`; when it is
    /// `None` or empty the configured default set applies.
    pub fn validate(&self, prd_json: &str, codebases: Option<&[String]>) -> ValidationReport {
        self.run(prd_json, codebases).0
    }

    /// Validate a PRD and, when it has no errors, return its typed stories.
    pub fn accept(
        &self,
        prd_json: &str,
        codebases: Option<&[String]>,
    ) -> Result<AcceptedPrd, ValidationReport> {
        let (report, document) = self.run(prd_json, codebases);
        let Some(document) = document.filter(|_| report.is_valid) else {
            return Err(report);
        };

        let stories = document
            .story_records()
            .iter()
            .map(Story::try_from)
            .collect::<Result<Vec<_>, _>>();

        match stories {
            Ok(stories) => Ok(AcceptedPrd {
                stories,
                warnings: report.warnings,
            }),
            Err(e) => Err(ValidationReport::fatal(
                "$.userStories",
                IssueCode::InvalidFormat,
                e.to_string(),
            )),
        }
    }

    fn run(
        &self,
        prd_json: &str,
        codebases: Option<&[String]>,
    ) -> (ValidationReport, Option<PrdDocument>) {
        let document = match PrdDocument::parse(prd_json) {
            Ok(document) => document,
            Err(e @ DocumentError::InvalidJson(_)) => {
                return (
                    ValidationReport::fatal("$", IssueCode::InvalidJson, e.to_string()),
                    None,
                );
            }
            Err(e @ DocumentError::NotAnObject) => {
                return (
                    ValidationReport::fatal("$", IssueCode::InvalidFormat, e.to_string()),
                    None,
                );
            }
        };

        let codebases = match codebases {
            Some(list) if !list.is_empty() => list,
            _ => self.config.default_codebases.as_slice(),
        };

        let mut findings = Findings::default();
        self.check_top_level(&document, &mut findings);
        if !findings.errors.is_empty() {
            return (ValidationReport::from_findings(findings), Some(document));
        }

        let stories = document.raw_stories();
        if stories.is_empty() {
            findings.error(
                "$.userStories",
                IssueCode::EmptyStories,
                "PRD must contain at least one user story",
            );
            return (ValidationReport::from_findings(findings), Some(document));
        }

        let mut seen_ids: HashSet<String> = HashSet::new();
        for (index, story) in stories.iter().enumerate() {
            let ctx = StoryContext {
                config: &self.config,
                codebases,
                seen_ids: &seen_ids,
            };
            if let Some(id) = check_story(story, index, &ctx, &mut findings) {
                seen_ids.insert(id);
            }
        }

        dependencies::check_dependencies(
            stories,
            &document.story_records(),
            &self.config,
            &mut findings,
        );

        tracing::debug!(
            stories = stories.len(),
            errors = findings.errors.len(),
            warnings = findings.warnings.len(),
            "validated PRD"
        );

        (ValidationReport::from_findings(findings), Some(document))
    }

    fn check_top_level(&self, document: &PrdDocument, findings: &mut Findings) {
        let path = format!("$.{STORIES_FIELD}");
        match document.field(STORIES_FIELD) {
            None => findings.error(
                &path,
                IssueCode::MissingField,
                format!("Required field '{STORIES_FIELD}' is missing"),
            ),
            Some(Value::Array(_)) => {}
            Some(_) => findings.error(
                &path,
                IssueCode::InvalidType,
                format!("Field '{STORIES_FIELD}' must be of type array"),
            ),
        }

        for field in RECOMMENDED_FIELDS {
            if document.field(field).is_none() {
                findings.warning(
                    &format!("$.{field}"),
                    IssueCode::MissingRecommendedField,
                    format!("Recommended field '{field}' is missing"),
                );
            }
        }
    }
}
