//! Shared PRD document model
//!
//! This module handles:
//! - Decoding raw PRD JSON into a loosely-typed document
//! - Lossy per-story records that tolerate missing or mistyped fields
//! - Strongly-typed stories for documents that passed validation
//! - The story dependency graph and the algorithms over it

mod document;
pub mod graph;
mod story;

pub use document::{DocumentError, PrdDocument, RECOMMENDED_FIELDS, STORIES_FIELD};
pub use graph::DependencyGraph;
pub use story::{Story, StoryConversionError, StoryRecord};
