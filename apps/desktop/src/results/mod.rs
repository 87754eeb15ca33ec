//! Result list — renders one card per record returned for the committed
//! query.

mod filter_tags;
mod result_card;

use dioxus::prelude::*;

use crate::state::*;
use result_card::ResultCardView;

#[component]
pub fn ResultsList() -> Element {
    let results = RESULTS.read();
    let query = QUERY.read();
    let searching = *SEARCHING.read();

    if query.trim().is_empty() {
        return rsx! {
            div {
                class: "results-empty",
                span { "Search for topics, authors or resources" }
            }
        };
    }

    rsx! {
        div {
            class: "results-list",
            div {
                class: "results-count",
                if searching {
                    span { "Searching..." }
                } else {
                    span { "{results.len()} results" }
                }
            }
            for record in results.iter() {
                ResultCardView { record: record.clone() }
            }
        }
    }
}
