//! Result-card projection: one `SearchResultRecord` in, one display-ready
//! card out. Pure — no state, nothing here can fail past this boundary.

use crate::body::extract_body;
use crate::config::AppConfig;
use crate::mapping::{combined_summary_url, domain_favicon, is_combined_summary, site_name, Theme};
use crate::text::{format_created_at, truncate_chars};
use crate::types::SearchResultRecord;

/// One badge group on a card: the configured field it came from plus the
/// record's values for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBadge {
    pub field: String,
    pub values: Vec<String>,
}

/// Display-ready projection of one search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub id: String,
    /// Link target — the raw URL, or the combined-summary rewrite.
    pub href: String,
    /// Truncated URL shown in the card header.
    pub display_url: String,
    /// Sanitized title, safe HTML only.
    pub title_html: String,
    /// Sanitized, truncated body, safe HTML only.
    pub body_html: String,
    pub site_name: String,
    pub favicon: String,
    /// `"D Mon, YYYY"`, absent when `created_at` is missing or unparseable.
    pub date: Option<String>,
    /// One entry per configured result-tag field present and non-empty on
    /// the record, in configured order.
    pub badges: Vec<TagBadge>,
}

/// Project a record into a card.
pub fn project(record: &SearchResultRecord, config: &AppConfig, theme: Theme) -> ResultCard {
    let href = if is_combined_summary(record, config) {
        combined_summary_url(&record.url, &record.id)
    } else {
        record.url.clone()
    };

    let sanitized_body = ammonia::clean(&extract_body(record).replace('\n', ""))
        .trim()
        .to_string();

    let badges = config
        .result_tag_fields
        .iter()
        .filter_map(|field| {
            let values = record.tag_values(field);
            if values.is_empty() {
                None
            } else {
                Some(TagBadge {
                    field: field.clone(),
                    values,
                })
            }
        })
        .collect();

    ResultCard {
        id: record.id.clone(),
        display_url: truncate_chars(&href, config.truncate_link_chars, "..."),
        title_html: ammonia::clean(&record.title),
        body_html: truncate_chars(&sanitized_body, config.truncate_body_chars, " ..."),
        site_name: site_name(&record.domain, config),
        favicon: domain_favicon(&record.domain, theme),
        date: record
            .created_at
            .as_deref()
            .and_then(format_created_at),
        badges,
        href,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SearchResultRecord {
        serde_json::from_str(
            r#"{
                "id": "r42",
                "url": "https://lists.example.org/thread/42",
                "title": "Fee estimation <b>improvements</b>",
                "body": "line one\nline two <script>alert(1)</script>",
                "body_type": "markdown",
                "domain": "lists.example.org",
                "created_at": "2023-01-05T10:30:00Z",
                "authors": ["Ada Lovelace"],
                "tags": ["fees"]
            }"#,
        )
        .unwrap()
    }

    fn config() -> AppConfig {
        AppConfig::default()
    }

    #[test]
    fn sanitizes_and_strips_newlines() {
        let card = project(&record(), &config(), Theme::Light);
        assert!(!card.body_html.contains('\n'));
        assert!(!card.body_html.contains("<script>"));
        assert!(!card.body_html.contains("alert(1)"));
        // safe markup in the title survives sanitization
        assert!(card.title_html.contains("<b>improvements</b>"));
    }

    #[test]
    fn truncates_body_and_url_independently() {
        let mut cfg = config();
        cfg.truncate_body_chars = 8;
        cfg.truncate_link_chars = 10;
        let card = project(&record(), &cfg, Theme::Light);
        assert!(card.body_html.ends_with(" ..."));
        assert!(card.display_url.ends_with("..."));
        assert_eq!(card.display_url, "https://li...");
    }

    #[test]
    fn short_fields_are_not_truncated() {
        let card = project(&record(), &config(), Theme::Light);
        assert!(!card.display_url.ends_with("..."));
        assert_eq!(card.display_url, card.href);
    }

    #[test]
    fn formats_created_at_and_omits_bad_dates() {
        let card = project(&record(), &config(), Theme::Light);
        assert_eq!(card.date.as_deref(), Some("5 Jan, 2023"));

        let mut rec = record();
        rec.created_at = Some("not a date".to_string());
        assert!(project(&rec, &config(), Theme::Light).date.is_none());

        rec.created_at = None;
        assert!(project(&rec, &config(), Theme::Light).date.is_none());
    }

    #[test]
    fn combined_summary_rewrites_href() {
        let mut cfg = config();
        cfg.tldr_domains = vec!["lists.example.org".to_string()];
        let mut rec = record();
        rec.title = "Combined summary of fee estimation".to_string();

        let card = project(&rec, &cfg, Theme::Light);
        assert_ne!(card.href, rec.url);
        assert!(card.href.ends_with("/r42"));

        // failing either condition leaves the raw URL in place
        rec.title = "Fee estimation".to_string();
        let card = project(&rec, &cfg, Theme::Light);
        assert_eq!(card.href, rec.url);
    }

    #[test]
    fn badges_follow_configured_field_order() {
        let mut cfg = config();
        cfg.result_tag_fields = vec![
            "tags".to_string(),
            "authors".to_string(),
            "transcript_by".to_string(),
        ];
        let card = project(&record(), &cfg, Theme::Light);
        let fields: Vec<&str> = card.badges.iter().map(|b| b.field.as_str()).collect();
        // transcript_by is absent on the record, so only two badges render
        assert_eq!(fields, vec!["tags", "authors"]);
    }

    #[test]
    fn favicon_tracks_theme() {
        let light = project(&record(), &config(), Theme::Light);
        let dark = project(&record(), &config(), Theme::Dark);
        assert_ne!(light.favicon, dark.favicon);
    }
}
