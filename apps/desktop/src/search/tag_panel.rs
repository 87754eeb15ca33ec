//! Tag panel — fixed example queries grouped by category, shown on an
//! empty, focused input.

use dioxus::prelude::*;

use super::commit_query;
use crate::state::*;

#[component]
pub fn TagPanel() -> Element {
    let config = CONFIG.read();

    rsx! {
        div {
            class: "search-overlay tag-panel",
            for group in config.search_tags.iter() {
                div {
                    class: "tag-group",
                    p { class: "tag-group-headline", "{group.headline}" }
                    div {
                        class: "tag-row",
                        for tag in group.tags.iter() {
                            button {
                                class: "tag-chip",
                                r#type: "button",
                                onclick: {
                                    let value = tag.clone();
                                    move |_| {
                                        let committed = SEARCH_BOX.write().choose(&value);
                                        commit_query(committed);
                                    }
                                },
                                "{tag}"
                            }
                        }
                    }
                }
            }
        }
    }
}
