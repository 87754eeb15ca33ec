//! Search panel — input field with its two overlay panels.

mod autocomplete_panel;
mod search_box;
mod tag_panel;

use dioxus::prelude::*;
use tracing::warn;

use crate::client;
use crate::state::*;
use search_box::SearchBox;

/// Search panel spanning the full width of the content area.
#[component]
pub fn SearchPanel() -> Element {
    rsx! {
        div {
            class: "search-panel",
            SearchBox {}
        }
    }
}

/// Commit a query to the shared store and refresh the observed result list.
pub fn commit_query(value: String) {
    *QUERY.write() = value.clone();
    if value.trim().is_empty() {
        RESULTS.write().clear();
        return;
    }

    let (endpoint, size) = {
        let config = CONFIG.read();
        (config.endpoints.search.clone(), config.result_page_size)
    };
    spawn(async move {
        *SEARCHING.write() = true;
        match client::fetch_results(&endpoint, value.trim(), size).await {
            Ok(results) => *RESULTS.write() = results,
            Err(err) => warn!("search request failed: {err}"),
        }
        *SEARCHING.write() = false;
    });
}
