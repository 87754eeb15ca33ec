//! "Suggest a source" modal. Field and phase state live in hooks, so the
//! whole form resets when the modal unmounts on close — no state leaks
//! across reopenings.

use dioxus::prelude::*;

use quarry_core::form::FormPhase;
use quarry_core::types::SubmissionRequest;
use quarry_core::validate::{form_is_complete, valid_email, valid_url, FieldState};

use crate::client;
use crate::components::CheckCircleIcon;
use crate::state::*;

#[component]
pub fn FormModal() -> Element {
    let url_field = use_signal(FieldState::default);
    let email_field = use_signal(FieldState::default);
    let phase = use_signal(FormPhase::default);

    let phase_now = phase.read().clone();
    let body = match phase_now {
        FormPhase::Success => rsx! {
            SuccessView {}
        },
        FormPhase::Error(message) => rsx! {
            ErrorView { phase, message }
        },
        _ => rsx! {
            SourceForm { url_field, email_field, phase }
        },
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| close_form(),
            div {
                class: "modal",
                onclick: move |e: Event<MouseData>| e.stop_propagation(),

                div {
                    class: "modal-header",
                    p { class: "modal-title", "Help Expand Our Source Library" }
                    p {
                        class: "modal-subtitle",
                        "We manually review every suggestion to ensure it meets our \
                         standards for reliable, technical content."
                    }
                }

                {body}
            }
        }
    }
}

/// Close the modal. The component unmounts, dropping the field and phase
/// hooks, so reopening always starts from the initial state.
fn close_form() {
    *FORM_OPEN.write() = false;
}

#[component]
fn SuccessView() -> Element {
    rsx! {
        div {
            class: "form-success",
            role: "button",
            onclick: move |_| close_form(),
            CheckCircleIcon {}
            p { "Submitted Successfully" }
        }
    }
}

#[component]
fn ErrorView(mut phase: Signal<FormPhase>, message: String) -> Element {
    rsx! {
        div {
            class: "form-error",
            p { class: "form-error-title", "Submission Failed" }
            p { class: "form-error-message", "{message}" }
            button {
                class: "form-retry",
                r#type: "button",
                onclick: move |_| phase.write().retry(),
                "Try again!"
            }
        }
    }
}

#[component]
fn SourceForm(
    mut url_field: Signal<FieldState>,
    mut email_field: Signal<FieldState>,
    phase: Signal<FormPhase>,
) -> Element {
    let url_valid = url_field.read().is_valid;
    let email_valid = email_field.read().is_valid;
    let complete = form_is_complete(&url_field.read(), &email_field.read());
    let loading = phase.read().is_loading();

    rsx! {
        form {
            class: "source-form",
            onsubmit: move |e: Event<FormData>| {
                e.prevent_default();
                submit_form(url_field, email_field, phase);
            },

            div {
                class: "form-field",
                label { r#for: "form-url", "Source's URL" }
                input {
                    id: "form-url",
                    r#type: "url",
                    placeholder: "https://",
                    maxlength: "255",
                    value: "{url_field.read().value}",
                    oninput: move |e: Event<FormData>| {
                        url_field.write().set(e.value(), valid_url);
                    },
                }
                if url_valid {
                    p {
                        class: "form-hint",
                        "Please enter the full URL, including http:// or https://"
                    }
                } else {
                    p { class: "form-invalid", "Invalid URL" }
                }
            }

            div {
                class: "form-field",
                label { r#for: "form-email", "Your Email" }
                input {
                    id: "form-email",
                    r#type: "email",
                    value: "{email_field.read().value}",
                    oninput: move |e: Event<FormData>| {
                        email_field.write().set(e.value(), valid_email);
                    },
                }
                if email_valid {
                    p {
                        class: "form-hint",
                        "We'll notify you once the source is approved and added"
                    }
                } else {
                    p { class: "form-invalid", "Invalid Email" }
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "form-cancel",
                    r#type: "button",
                    disabled: loading,
                    onclick: move |_| close_form(),
                    "Cancel"
                }
                button {
                    class: "form-submit",
                    r#type: "submit",
                    disabled: !complete || loading,
                    span { "Submit Source" }
                    if loading {
                        span { class: "spinner" }
                    }
                }
            }
        }
    }
}

/// Build the typed payload, flip to `Loading` synchronously, and fire the
/// single submission request. At most one request is in flight per form —
/// `begin_submit` refuses re-entry while loading.
fn submit_form(
    url_field: Signal<FieldState>,
    email_field: Signal<FieldState>,
    mut phase: Signal<FormPhase>,
) {
    if !form_is_complete(&url_field.read(), &email_field.read()) {
        return;
    }
    if !phase.write().begin_submit() {
        return;
    }

    let request = SubmissionRequest {
        url: url_field.read().value.trim().to_string(),
        email: email_field.read().value.trim().to_string(),
    };
    let endpoint = CONFIG.read().endpoints.submit.clone();

    spawn(async move {
        let outcome = client::submit_source(&endpoint, &request)
            .await
            .map_err(|err| err.to_string());
        phase.write().resolve(outcome);
    });
}
