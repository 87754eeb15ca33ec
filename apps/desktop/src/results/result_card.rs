//! One result card. The projection itself lives in `quarry-core`; this
//! component renders it and handles delegated link-opening.

use dioxus::prelude::*;

use quarry_core::card;
use quarry_core::types::SearchResultRecord;

use super::filter_tags::FilterTags;
use crate::components::DateIcon;
use crate::state::*;

#[component]
pub fn ResultCardView(record: SearchResultRecord) -> Element {
    let projected = {
        let config = CONFIG.read();
        let theme = *THEME.read();
        card::project(&record, &config, theme)
    };

    let card_href = projected.href.clone();
    let date = projected.date.clone().unwrap_or_default();

    rsx! {
        div {
            class: "result-card",
            role: "link",
            // Clicking anywhere on the card activates the primary link;
            // the inner anchors stop propagation so a native link click
            // does not double-activate.
            onclick: move |_| open_link(&card_href),

            div {
                class: "result-meta",
                img {
                    class: "result-favicon",
                    src: "{projected.favicon}",
                    alt: "{projected.site_name} favicon",
                }
                p { class: "result-site", "{projected.site_name}" }
                span { class: "result-dot" }
                a {
                    class: "result-url",
                    href: "{projected.href}",
                    target: "_blank",
                    onclick: move |e: Event<MouseData>| e.stop_propagation(),
                    "{projected.display_url}"
                }
            }

            h2 {
                class: "result-title",
                a {
                    href: "{projected.href}",
                    target: "_blank",
                    onclick: move |e: Event<MouseData>| e.stop_propagation(),
                    dangerous_inner_html: "{projected.title_html}",
                }
            }

            p {
                class: "result-body",
                dangerous_inner_html: "{projected.body_html}",
            }

            div {
                class: "result-footer",
                if !date.is_empty() {
                    div {
                        class: "result-date",
                        DateIcon {}
                        p { "{date}" }
                    }
                }
                div {
                    class: "result-badges",
                    for badge in projected.badges.iter() {
                        FilterTags {
                            field: badge.field.clone(),
                            values: badge.values.clone(),
                        }
                    }
                }
            }
        }
    }
}

/// Open a result link in a new browsing context.
fn open_link(url: &str) {
    let _ = document::eval(&format!("window.open({url:?}, '_blank');"));
}
