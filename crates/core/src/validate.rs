//! Client-side field validation for the suggestion form. An empty field is
//! never marked invalid; a non-empty, pattern-failing value is marked
//! invalid immediately.

use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(?:www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b(?:[-a-zA-Z0-9()@:%_+.~#?&/=]*)$",
    )
    .expect("url pattern compiles")
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles")
});

pub fn valid_url(value: &str) -> bool {
    URL_RE.is_match(value)
}

pub fn valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// One form field: the typed value plus its current validity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub is_valid: bool,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            value: String::new(),
            is_valid: true,
        }
    }
}

impl FieldState {
    /// Record a keystroke. Runs the validator on every edit, but an empty
    /// (trimmed) value resets to valid so errors never flash before first
    /// input.
    pub fn set(&mut self, value: String, validate: impl Fn(&str) -> bool) {
        let trimmed = value.trim();
        self.is_valid = trimmed.is_empty() || validate(trimmed);
        self.value = value;
    }
}

/// Submit gate: both fields trimmed-non-empty and currently valid.
pub fn form_is_complete(url: &FieldState, email: &FieldState) -> bool {
    !url.value.trim().is_empty()
        && !email.value.trim().is_empty()
        && url.is_valid
        && email.is_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_pattern_accepts_scheme_host_path() {
        assert!(valid_url("https://example.com"));
        assert!(valid_url("http://www.example.com/a/b?q=1"));
        assert!(valid_url("https://sub.example.co.uk/path#frag"));
    }

    #[test]
    fn url_pattern_rejects_missing_scheme_or_host() {
        assert!(!valid_url("example.com"));
        assert!(!valid_url("ftp://example.com"));
        assert!(!valid_url("https://"));
        assert!(!valid_url("https://nodot"));
    }

    #[test]
    fn email_pattern_is_minimal_local_at_domain() {
        assert!(valid_email("a@b.com"));
        assert!(valid_email("first.last@sub.example.org"));
        assert!(!valid_email("a@b"));
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email("a b@c.com"));
    }

    #[test]
    fn empty_field_is_never_invalid() {
        let mut field = FieldState::default();
        field.set("garbage".to_string(), valid_url);
        assert!(!field.is_valid);
        field.set("".to_string(), valid_url);
        assert!(field.is_valid);
        field.set("   ".to_string(), valid_url);
        assert!(field.is_valid);
    }

    #[test]
    fn nonempty_failing_value_is_invalid_immediately() {
        let mut field = FieldState::default();
        field.set("h".to_string(), valid_url);
        assert!(!field.is_valid);
        field.set("https://example.com".to_string(), valid_url);
        assert!(field.is_valid);
    }

    #[test]
    fn submit_gate_requires_both_fields() {
        let mut url = FieldState::default();
        let mut email = FieldState::default();
        assert!(!form_is_complete(&url, &email));

        url.set("https://example.com".to_string(), valid_url);
        assert!(!form_is_complete(&url, &email));

        email.set("a@b.com".to_string(), valid_email);
        assert!(form_is_complete(&url, &email));

        email.set("broken".to_string(), valid_email);
        assert!(!form_is_complete(&url, &email));
    }
}
