//! Typed HTTP clients for the three hosted-service endpoints. Each call
//! deserializes into the wire types from `quarry-core`; callers decide how
//! a failure degrades.

use std::sync::LazyLock;

use quarry_core::types::{
    SearchRequest, SearchResponse, SearchResultRecord, SubmissionRequest, SubmissionResponse,
    SuggestResponse, Suggestion,
};

static HTTP: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Fetch autocomplete entries for the current input text. Only called once
/// the input passes the minimum-character threshold.
pub async fn fetch_suggestions(endpoint: &str, term: &str) -> Result<Vec<Suggestion>, reqwest::Error> {
    let response: SuggestResponse = HTTP
        .get(endpoint)
        .query(&[("q", term)])
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(response.suggestions)
}

/// Fetch results for a committed query.
pub async fn fetch_results(
    endpoint: &str,
    query: &str,
    size: usize,
) -> Result<Vec<SearchResultRecord>, reqwest::Error> {
    let request = SearchRequest {
        query: query.to_string(),
        size,
    };
    let response: SearchResponse = HTTP
        .post(endpoint)
        .json(&request)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    Ok(response.results)
}

/// Submit a suggested source as form data. The response's `result` field
/// decides success; the form state machine maps everything else to an
/// error phase.
pub async fn submit_source(
    endpoint: &str,
    request: &SubmissionRequest,
) -> Result<SubmissionResponse, reqwest::Error> {
    HTTP.post(endpoint)
        .form(&[
            ("URL", request.url.as_str()),
            ("Email", request.email.as_str()),
        ])
        .send()
        .await?
        .json()
        .await
}
