//! Global application state using Dioxus signals.

use dioxus::prelude::*;
use quarry_core::config::AppConfig;
use quarry_core::mapping::Theme;
use quarry_core::searchbox::SearchBoxState;
use quarry_core::types::{SearchResultRecord, Suggestion};

/// Runtime configuration — loaded once on first access.
pub static CONFIG: GlobalSignal<AppConfig> = Signal::global(AppConfig::load_or_default);

/// Committed query — the shared store the result list observes. Writes go
/// through [`crate::search::commit_query`].
pub static QUERY: GlobalSignal<String> = Signal::global(String::new);

/// Local search-box state (text, focus, typed flag, outside-click flag).
/// Global so the document-level click handler on the app shell can reach it.
pub static SEARCH_BOX: GlobalSignal<SearchBoxState> = Signal::global(SearchBoxState::default);

/// Live autocomplete entries for the current input text.
pub static SUGGESTIONS: GlobalSignal<Vec<Suggestion>> = Signal::global(Vec::new);

/// Results for the committed query.
pub static RESULTS: GlobalSignal<Vec<SearchResultRecord>> = Signal::global(Vec::new);

/// A result request is in flight.
pub static SEARCHING: GlobalSignal<bool> = Signal::global(|| false);

/// UI theme, drives favicon variants and the shell class.
pub static THEME: GlobalSignal<Theme> = Signal::global(Theme::default);

/// The "suggest a source" modal is open. The modal mounts only while this
/// is set, so its field and phase state resets on every close.
pub static FORM_OPEN: GlobalSignal<bool> = Signal::global(|| false);
