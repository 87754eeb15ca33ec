//! Search input controller: owns the typed text, decides which overlay
//! panel shows, and commits queries to the shared store on submit, tag
//! click, or suggestion click.

use dioxus::prelude::*;
use tracing::warn;

use quarry_core::searchbox::ActivePanel;

use super::autocomplete_panel::AutocompletePanel;
use super::commit_query;
use super::tag_panel::TagPanel;
use crate::client;
use crate::components::SearchIcon;
use crate::state::*;

#[component]
pub fn SearchBox() -> Element {
    let debounce_gen = use_signal(|| 0u64);

    // Mirror externally-committed query changes into the local value.
    use_effect(move || {
        let query = QUERY.read().clone();
        SEARCH_BOX.write().sync_query(&query);
    });

    let sb = SEARCH_BOX.read();
    let min_chars = CONFIG.read().autocomplete_min_chars;
    let panel = sb.active_panel(true, min_chars);
    let is_open = panel != ActivePanel::None;
    let show_hint = !(sb.focused && !sb.outside_click);
    let show_clear = !sb.input.is_empty() && sb.typed;

    rsx! {
        form {
            class: "search-form",
            onsubmit: move |e: Event<FormData>| {
                e.prevent_default();
                let committed = SEARCH_BOX.write().submit();
                commit_query(committed);
            },
            div {
                class: "search-box",
                // Clicks inside the container never count as outside clicks.
                onclick: move |e: Event<MouseData>| {
                    e.stop_propagation();
                    SEARCH_BOX.write().click_inside();
                },

                div {
                    class: if is_open { "search-field open" } else { "search-field" },
                    input {
                        class: "search-input",
                        r#type: "text",
                        placeholder: "Search for topics, authors or resources...",
                        value: "{sb.input}",
                        onfocus: move |_| SEARCH_BOX.write().focus(),
                        oninput: move |e: Event<FormData>| {
                            let value = e.value();
                            SEARCH_BOX.write().edit(value.clone());
                            schedule_suggest_fetch(value, debounce_gen);
                        },
                    }

                    if show_hint {
                        p {
                            class: "search-hint",
                            kbd { "Ctrl" }
                            " + "
                            kbd { "K" }
                        }
                    }

                    if show_clear {
                        button {
                            class: "search-clear",
                            r#type: "button",
                            onclick: move |_| {
                                SEARCH_BOX.write().clear();
                                SUGGESTIONS.write().clear();
                            },
                            "\u{00D7}"
                        }
                    }
                }

                if panel == ActivePanel::Tags {
                    TagPanel {}
                }
                if panel == ActivePanel::Autocomplete {
                    AutocompletePanel {}
                }
            }
            button {
                class: "search-submit",
                SearchIcon {}
            }
        }
    }
}

/// Debounced autocomplete fetch: increment the generation, sleep the
/// configured interval, and only the newest generation's request lands.
/// Below the minimum-character threshold nothing is requested and stale
/// entries are dropped.
fn schedule_suggest_fetch(value: String, mut debounce_gen: Signal<u64>) {
    let (endpoint, min_chars, debounce_ms) = {
        let config = CONFIG.read();
        (
            config.endpoints.suggest.clone(),
            config.autocomplete_min_chars,
            config.autocomplete_debounce_ms,
        )
    };

    if value.trim().chars().count() < min_chars {
        SUGGESTIONS.write().clear();
        return;
    }

    let gen = *debounce_gen.read() + 1;
    *debounce_gen.write() = gen;

    spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(debounce_ms)).await;
        if *debounce_gen.read() != gen {
            return;
        }
        match client::fetch_suggestions(&endpoint, value.trim()).await {
            Ok(suggestions) => *SUGGESTIONS.write() = suggestions,
            Err(err) => {
                warn!("autocomplete request failed: {err}");
                SUGGESTIONS.write().clear();
            }
        }
    });
}
