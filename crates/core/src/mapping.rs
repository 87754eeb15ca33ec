//! Domain mapping: canonical site names, theme-aware favicons, and the
//! combined-summary URL rewrite.

use crate::config::AppConfig;
use crate::types::SearchResultRecord;

/// UI theme, selects the favicon variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Canonical display name for a record's domain: the configured mapping
/// when present, otherwise the bare host (scheme and `www.` stripped).
pub fn site_name(domain: &str, config: &AppConfig) -> String {
    if let Some(name) = config.site_names.get(domain) {
        return name.clone();
    }
    bare_host(domain).to_string()
}

/// Favicon asset path for a domain, with a `-dark` variant per theme.
pub fn domain_favicon(domain: &str, theme: Theme) -> String {
    let stem: String = bare_host(domain)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let suffix = if theme.is_dark() { "-dark" } else { "" };
    format!("assets/favicons/{stem}{suffix}.png")
}

/// Whether a record should display a rewritten combined-summary URL:
/// its domain is in the configured list and its title carries the marker.
pub fn is_combined_summary(record: &SearchResultRecord, config: &AppConfig) -> bool {
    config.tldr_domains.iter().any(|d| d == &record.domain)
        && record.title.contains(&config.combined_summary_tag)
}

/// Derived URL for a combined-summary record, distinct from the raw
/// source URL: the record id appended to the thread URL.
pub fn combined_summary_url(url: &str, id: &str) -> String {
    format!("{}/{}", url.trim_end_matches('/'), id)
}

fn bare_host(domain: &str) -> &str {
    let host = domain
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.");
    host.split('/').next().unwrap_or(host)
}
