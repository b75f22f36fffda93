//! PaperLens Core - Domain models and shared types
//!
//! This crate defines the core abstractions used throughout PaperLens:
//! - The NER label set and which labels the system consumes
//! - Entity categories (author, organization, citation) and their display
//!   attributes
//! - Entity buckets built from one analysis run
//! - Common error types
//! - Configuration management

pub mod config;

pub use config::{AppConfig, ConfigError, GraphStyleConfig, LoggingConfig, ServerConfig};

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for PaperLens operations
#[derive(Error, Debug)]
pub enum PaperLensError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Extraction error: {0}")]
    ExtractionError(String),

    #[error("Graph error: {0}")]
    GraphError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PaperLensError>;

// ============================================================================
// NER Labels
// ============================================================================

/// Labels produced by the NER engine.
///
/// The label set is fixed. PaperLens consumes `Person`, `Org`, `WorkOfArt`
/// and `Misc`; every other label is detected and then discarded during
/// bucketing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NerLabel {
    Person,
    Org,
    WorkOfArt,
    Misc,
    Date,
    Cardinal,
}

impl NerLabel {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Org => "ORG",
            Self::WorkOfArt => "WORK_OF_ART",
            Self::Misc => "MISC",
            Self::Date => "DATE",
            Self::Cardinal => "CARDINAL",
        }
    }

    /// The entity category this label feeds, if the system consumes it
    pub fn category(&self) -> Option<EntityCategory> {
        match self {
            Self::Person => Some(EntityCategory::Author),
            Self::Org => Some(EntityCategory::Organization),
            Self::WorkOfArt | Self::Misc => Some(EntityCategory::Citation),
            Self::Date | Self::Cardinal => None,
        }
    }
}

impl std::fmt::Display for NerLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Entity Categories
// ============================================================================

/// Category of a node in the knowledge graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    Author,
    Organization,
    Citation,
}

impl EntityCategory {
    /// Human-readable node label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Author => "Author",
            Self::Organization => "Organization",
            Self::Citation => "Citation",
        }
    }

    /// Default display color for graph nodes of this category
    pub fn default_color(&self) -> &'static str {
        match self {
            Self::Author => "blue",
            Self::Organization => "red",
            Self::Citation => "green",
        }
    }

    /// Placeholder shown when no entities of this category were found
    pub fn none_found_message(&self) -> &'static str {
        match self {
            Self::Author => "No authors found",
            Self::Organization => "No organizations found",
            Self::Citation => "No citations found",
        }
    }
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Entity Buckets
// ============================================================================

/// The three deduplicated entity sets produced by one analysis run.
///
/// Sets are keyed by literal entity text. `BTreeSet` keeps iteration order
/// deterministic so graph construction and rendered output are stable for a
/// given input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityBuckets {
    pub authors: BTreeSet<String>,
    pub organizations: BTreeSet<String>,
    pub citations: BTreeSet<String>,
}

impl EntityBuckets {
    /// Create empty buckets
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entity under the category its label feeds.
    ///
    /// Labels outside the consumed set are discarded. Returns whether the
    /// entity was kept.
    pub fn insert(&mut self, label: NerLabel, text: impl Into<String>) -> bool {
        match label.category() {
            Some(EntityCategory::Author) => self.authors.insert(text.into()),
            Some(EntityCategory::Organization) => self.organizations.insert(text.into()),
            Some(EntityCategory::Citation) => self.citations.insert(text.into()),
            None => false,
        }
    }

    /// Get the set for a category
    pub fn get(&self, category: EntityCategory) -> &BTreeSet<String> {
        match category {
            EntityCategory::Author => &self.authors,
            EntityCategory::Organization => &self.organizations,
            EntityCategory::Citation => &self.citations,
        }
    }

    /// Total number of entities across all categories
    pub fn len(&self) -> usize {
        self.authors.len() + self.organizations.len() + self.citations.len()
    }

    /// Whether no entities were found at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display lines for one category: the entity texts, or the explicit
    /// "none found" placeholder when the set is empty
    pub fn display_lines(&self, category: EntityCategory) -> Vec<String> {
        let set = self.get(category);
        if set.is_empty() {
            vec![category.none_found_message().to_string()]
        } else {
            set.iter().cloned().collect()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumed_labels_map_to_categories() {
        assert_eq!(NerLabel::Person.category(), Some(EntityCategory::Author));
        assert_eq!(NerLabel::Org.category(), Some(EntityCategory::Organization));
        assert_eq!(
            NerLabel::WorkOfArt.category(),
            Some(EntityCategory::Citation)
        );
        assert_eq!(NerLabel::Misc.category(), Some(EntityCategory::Citation));
    }

    #[test]
    fn test_discarded_labels_have_no_category() {
        assert_eq!(NerLabel::Date.category(), None);
        assert_eq!(NerLabel::Cardinal.category(), None);
    }

    #[test]
    fn test_buckets_route_by_label() {
        let mut buckets = EntityBuckets::new();
        assert!(buckets.insert(NerLabel::Person, "Jane Doe"));
        assert!(buckets.insert(NerLabel::Org, "Acme Corp"));
        assert!(buckets.insert(NerLabel::WorkOfArt, "Attention Is All You Need"));
        assert!(!buckets.insert(NerLabel::Date, "2024"));

        assert!(buckets.authors.contains("Jane Doe"));
        assert!(!buckets.organizations.contains("Jane Doe"));
        assert!(!buckets.citations.contains("Jane Doe"));
        assert!(buckets.organizations.contains("Acme Corp"));
        assert_eq!(buckets.len(), 3);
    }

    #[test]
    fn test_buckets_deduplicate() {
        let mut buckets = EntityBuckets::new();
        assert!(buckets.insert(NerLabel::Person, "Jane Doe"));
        assert!(!buckets.insert(NerLabel::Person, "Jane Doe"));
        assert_eq!(buckets.authors.len(), 1);
    }

    #[test]
    fn test_display_lines_placeholder_when_empty() {
        let buckets = EntityBuckets::new();
        assert_eq!(
            buckets.display_lines(EntityCategory::Author),
            vec!["No authors found".to_string()]
        );
        assert_eq!(
            buckets.display_lines(EntityCategory::Citation),
            vec!["No citations found".to_string()]
        );
    }

    #[test]
    fn test_category_colors() {
        assert_eq!(EntityCategory::Author.default_color(), "blue");
        assert_eq!(EntityCategory::Organization.default_color(), "red");
        assert_eq!(EntityCategory::Citation.default_color(), "green");
    }
}
