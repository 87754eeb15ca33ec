//! Record and wire types shared across Quarry: search result records,
//! autocomplete suggestions, tag-panel groups, and the typed payloads
//! exchanged with the hosted search service.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Result records
// ---------------------------------------------------------------------------

/// Body encoding of a search result record. Unknown tags are preserved
/// verbatim so the body extraction fallback chain can dispatch on them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum BodyType {
    Markdown,
    Raw,
    Html,
    CombinedSummary,
    Other(String),
}

impl From<String> for BodyType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "markdown" => BodyType::Markdown,
            "raw" => BodyType::Raw,
            "html" => BodyType::Html,
            "combined-summary" => BodyType::CombinedSummary,
            _ => BodyType::Other(value),
        }
    }
}

impl Default for BodyType {
    fn default() -> Self {
        BodyType::Other(String::new())
    }
}

/// One search result as returned by the hosted index. Read-only to the
/// renderer; every optional field degrades to an empty render.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResultRecord {
    pub id: String,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub body_formatted: Option<String>,
    #[serde(default)]
    pub body_type: BodyType,
    pub domain: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub transcript_by: Option<String>,
}

impl SearchResultRecord {
    /// Values for a configured result-tag field, by field name. Returns an
    /// empty vec for unknown fields or fields absent on this record.
    pub fn tag_values(&self, field: &str) -> Vec<String> {
        match field {
            "authors" => self.authors.clone(),
            "tags" => self.tags.clone(),
            "domain" => vec![self.domain.clone()],
            "transcript_by" => self.transcript_by.clone().into_iter().collect(),
            _ => Vec::new(),
        }
    }
}

/// One live autocomplete entry. Extra metadata from the service is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    pub suggestion: String,
}

/// A fixed tag-panel group: headline plus example queries, optionally tied
/// to a facet field for filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagGroup {
    pub headline: String,
    #[serde(default)]
    pub facet: String,
    #[serde(default)]
    pub filter: bool,
    pub tags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Wire payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub size: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResultRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestResponse {
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    pub url: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionResponse {
    pub result: String,
    #[serde(default)]
    pub message: Option<String>,
}
