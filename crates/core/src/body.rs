//! Body extraction for result records. Dispatches on `body_type`; every
//! fallback step is an explicit function so nothing here ever errors
//! outward.

use serde::Deserialize;

use crate::types::{BodyType, SearchResultRecord};

/// Extract the raw display body for a record.
///
/// Known encodings use `body` (or `summary` for `raw`); unknown encodings
/// are treated as a bracket-less JSON sequence of `{text}` fragments and
/// joined with single spaces, falling back to `body` / `body_formatted`
/// when that parse fails.
pub fn extract_body(record: &SearchResultRecord) -> String {
    match &record.body_type {
        BodyType::Markdown | BodyType::Html | BodyType::CombinedSummary => record.body.clone(),
        BodyType::Raw => record
            .summary
            .clone()
            .unwrap_or_else(|| record.body.clone()),
        BodyType::Other(_) => {
            fragments_from_json(&record.body).unwrap_or_else(|| fallback_body(record))
        }
    }
}

#[derive(Deserialize)]
struct Fragment {
    #[serde(default)]
    text: String,
}

/// Parse `body` as a comma-separated sequence of `{text}` objects (the
/// service sends these without the enclosing brackets) and join the text
/// fields with single spaces. `None` when the parse fails.
pub fn fragments_from_json(body: &str) -> Option<String> {
    let wrapped = format!("[{body}]");
    let fragments: Vec<Fragment> = serde_json::from_str(&wrapped).ok()?;
    Some(
        fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// Last resort when the fragment parse fails: `body` when non-empty,
/// otherwise `body_formatted`, otherwise the empty string.
pub fn fallback_body(record: &SearchResultRecord) -> String {
    if record.body.is_empty() {
        record.body_formatted.clone().unwrap_or_default()
    } else {
        record.body.clone()
    }
}
