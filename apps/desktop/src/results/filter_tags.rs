//! Tag badges for one configured result-tag field.

use dioxus::prelude::*;

#[component]
pub fn FilterTags(field: String, values: Vec<String>) -> Element {
    rsx! {
        div {
            class: "filter-tags",
            onclick: move |e: Event<MouseData>| e.stop_propagation(),
            for value in values.iter() {
                span {
                    class: "filter-tag",
                    title: "{field}",
                    "{value}"
                }
            }
        }
    }
}
