//! Autocomplete panel — live suggestions keyed to the current input text.
//! An empty suggestions list simply renders an empty panel.

use dioxus::prelude::*;

use super::commit_query;
use crate::state::*;

#[component]
pub fn AutocompletePanel() -> Element {
    let suggestions = SUGGESTIONS.read();

    rsx! {
        div {
            class: "search-overlay autocomplete-panel",
            for entry in suggestions.iter() {
                p {
                    class: "autocomplete-item",
                    onclick: {
                        let value = entry.suggestion.clone();
                        move |_| {
                            let committed = SEARCH_BOX.write().choose(&value);
                            SUGGESTIONS.write().clear();
                            commit_query(committed);
                        }
                    },
                    "{entry.suggestion}"
                }
            }
        }
    }
}
