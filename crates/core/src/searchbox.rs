//! Search-box interaction state: which overlay panel (fixed tags or live
//! autocomplete) is visible beneath the input, and how keystrokes, focus,
//! clicks, and selections move between them. Pure state — the UI layer
//! wires events in and reads the active panel out.

/// Overlay panel currently visible beneath the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePanel {
    Tags,
    Autocomplete,
    None,
}

/// Local state of the search input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBoxState {
    pub input: String,
    pub focused: bool,
    pub typed: bool,
    /// Set by any pointer interaction outside the search container;
    /// suppresses both panels until the input regains focus.
    pub outside_click: bool,
}

impl SearchBoxState {
    /// Input regained focus: panel visibility is re-evaluated.
    pub fn focus(&mut self) {
        self.focused = true;
        self.outside_click = false;
    }

    /// Pointer interaction inside the search container.
    pub fn click_inside(&mut self) {
        self.outside_click = false;
    }

    /// Pointer interaction outside the search container.
    pub fn click_outside(&mut self) {
        self.outside_click = true;
    }

    /// A keystroke changed the input value.
    pub fn edit(&mut self, value: String) {
        self.input = value;
        self.typed = true;
    }

    /// Explicit clear action: empties the input and typed-state without
    /// touching focus.
    pub fn clear(&mut self) {
        self.input.clear();
        self.typed = false;
    }

    /// A tag or suggestion was selected: the input takes the value, both
    /// panels are suppressed, and the value is returned for commit.
    pub fn choose(&mut self, value: &str) -> String {
        self.input = value.to_string();
        self.typed = false;
        self.outside_click = true;
        value.to_string()
    }

    /// Submit (enter / button): closes the panels before handing the
    /// committed string to the caller.
    pub fn submit(&mut self) -> String {
        self.outside_click = true;
        self.input.trim().to_string()
    }

    /// External query change (navigation, another widget): mirror it into
    /// the local value without counting as typing.
    pub fn sync_query(&mut self, query: &str) {
        if !query.is_empty() && self.input != query {
            self.input = query.to_string();
        }
    }

    /// Visibility policy, evaluated in precedence order:
    /// 1. focused, no outside click since focus, empty input → tag panel;
    /// 2. non-empty, typed, autocomplete enabled, at least `min_chars`
    ///    characters, no outside click → autocomplete panel;
    /// 3. otherwise neither.
    pub fn active_panel(&self, autocomplete_enabled: bool, min_chars: usize) -> ActivePanel {
        if self.focused && !self.outside_click && self.input.is_empty() {
            return ActivePanel::Tags;
        }
        if !self.input.is_empty()
            && self.typed
            && autocomplete_enabled
            && !self.outside_click
            && self.input.chars().count() >= min_chars
        {
            return ActivePanel::Autocomplete;
        }
        ActivePanel::None
    }
}
