//! Runtime configuration. Loaded from `quarry.toml` or defaults — every
//! field has a working default so the app runs with no config file at all.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::types::TagGroup;

/// Configuration error raised while reading or parsing `quarry.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Endpoints of the hosted search service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub search: String,
    pub suggest: String,
    pub submit: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            search: "https://search.quarry.example/api/search".to_string(),
            suggest: "https://search.quarry.example/api/suggest".to_string(),
            submit: "https://search.quarry.example/api/sources".to_string(),
        }
    }
}

/// Runtime configuration for the front-end: truncation limits, result-tag
/// field order, combined-summary rewriting, tag-panel content, endpoints,
/// and autocomplete behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Character limit for the rendered body before the ellipsis marker.
    pub truncate_body_chars: usize,
    /// Character limit for the displayed URL before the ellipsis marker.
    pub truncate_link_chars: usize,
    /// Result-tag field names rendered as badges, in this order.
    pub result_tag_fields: Vec<String>,
    /// Domains whose combined-summary records get a rewritten display URL.
    pub tldr_domains: Vec<String>,
    /// Title marker identifying a combined-summary record.
    pub combined_summary_tag: String,
    /// Minimum typed characters before autocomplete is requested or shown.
    pub autocomplete_min_chars: usize,
    /// Debounce interval for autocomplete requests, in milliseconds.
    pub autocomplete_debounce_ms: u64,
    /// Number of results requested per committed query.
    pub result_page_size: usize,
    /// Display names for known domains; unknown domains fall back to the
    /// bare host.
    pub site_names: HashMap<String, String>,
    /// Fixed tag-panel groups shown on an empty, focused input.
    pub search_tags: Vec<TagGroup>,
    pub endpoints: Endpoints,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            truncate_body_chars: 300,
            truncate_link_chars: 60,
            result_tag_fields: vec![
                "authors".to_string(),
                "tags".to_string(),
                "transcript_by".to_string(),
            ],
            tldr_domains: vec![
                "https://lists.quarry.example/protocol-dev".to_string(),
                "https://lists.quarry.example/payments-dev".to_string(),
            ],
            combined_summary_tag: "Combined summary".to_string(),
            autocomplete_min_chars: 3,
            autocomplete_debounce_ms: 0,
            result_page_size: 25,
            site_names: HashMap::new(),
            search_tags: default_search_tags(),
            endpoints: Endpoints::default(),
        }
    }
}

impl AppConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Load `quarry.toml` from the working directory, falling back to
    /// defaults when the file is absent or unreadable.
    pub fn load_or_default() -> Self {
        let path = Path::new("quarry.toml");
        match Self::load(path) {
            Ok(config) => {
                info!("loaded config from {}", path.display());
                config
            }
            Err(err) => {
                info!("using default config ({err})");
                Self::default()
            }
        }
    }
}

fn default_search_tags() -> Vec<TagGroup> {
    vec![
        TagGroup {
            headline: "Search by Keywords".to_string(),
            facet: String::new(),
            filter: false,
            tags: vec![
                "Adaptor signatures".to_string(),
                "Async payments".to_string(),
                "Eclipse attacks".to_string(),
                "Fee estimation".to_string(),
                "Transaction relay".to_string(),
            ],
        },
        TagGroup {
            headline: "Search by Sources".to_string(),
            facet: "domain".to_string(),
            filter: true,
            tags: vec![
                "https://lists.quarry.example/protocol-dev".to_string(),
                "https://lists.quarry.example/payments-dev".to_string(),
                "https://forum.quarry.example".to_string(),
                "https://transcripts.quarry.example".to_string(),
            ],
        },
        TagGroup {
            headline: "Search by Authors".to_string(),
            facet: "authors".to_string(),
            filter: true,
            tags: vec![
                "Ada Lovelace".to_string(),
                "Barbara Liskov".to_string(),
                "Grace Hopper".to_string(),
                "Niklaus Wirth".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.autocomplete_min_chars, 3);
        assert_eq!(config.autocomplete_debounce_ms, 0);
        assert!(config.truncate_body_chars > config.truncate_link_chars);
        assert_eq!(config.search_tags.len(), 3);
        assert_eq!(config.result_tag_fields[0], "authors");
    }

    #[test]
    fn partial_toml_overrides_defaults() {
        let config = AppConfig::from_toml(
            r#"
            truncate_body_chars = 120
            tldr_domains = ["https://lists.example.org/dev"]

            [endpoints]
            search = "https://api.example.org/search"
            "#,
        )
        .unwrap();
        assert_eq!(config.truncate_body_chars, 120);
        assert_eq!(config.truncate_link_chars, 60);
        assert_eq!(config.tldr_domains, vec!["https://lists.example.org/dev"]);
        assert_eq!(config.endpoints.search, "https://api.example.org/search");
        // untouched table fields keep their defaults
        assert!(config.endpoints.submit.contains("quarry.example"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(AppConfig::from_toml("truncate_body_chars = \"many\"").is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "result_page_size = 5").unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.result_page_size, 5);
    }
}
