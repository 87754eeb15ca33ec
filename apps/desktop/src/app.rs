//! Root application component.

use dioxus::prelude::*;

use quarry_core::mapping::Theme;

use crate::form::FormModal;
use crate::results::ResultsList;
use crate::search::SearchPanel;
use crate::state::*;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    let theme = *THEME.read();
    let form_open = *FORM_OPEN.read();
    let shell_class = if theme.is_dark() {
        "app-shell dark"
    } else {
        "app-shell"
    };

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "{shell_class}",
            // Document-level click stream: anything that bubbles up here
            // happened outside the search container (which stops
            // propagation), so both panels get suppressed. The handler
            // lives and dies with the shell.
            onclick: move |_| SEARCH_BOX.write().click_outside(),

            Header {}

            main {
                class: "content-area",
                SearchPanel {}
                ResultsList {}
            }
        }

        if form_open {
            FormModal {}
        }
    }
}

#[component]
fn Header() -> Element {
    let theme = *THEME.read();
    let theme_glyph = if theme.is_dark() { "\u{2600}" } else { "\u{263E}" };

    rsx! {
        header {
            class: "titlebar",
            span { class: "titlebar-title", "Quarry" }
            div {
                class: "titlebar-actions",
                button {
                    class: "titlebar-btn",
                    title: "Toggle theme",
                    onclick: move |_| {
                        let next = THEME.read().toggled();
                        *THEME.write() = next;
                    },
                    "{theme_glyph}"
                }
                button {
                    class: "titlebar-btn suggest-btn",
                    onclick: move |e: Event<MouseData>| {
                        e.stop_propagation();
                        *FORM_OPEN.write() = true;
                    },
                    "Suggest a source"
                }
            }
        }
    }
}
