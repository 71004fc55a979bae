//! Shared context passed to modules

use reqwest::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_FACILITATOR: &str = "田中太郎";

/// Shared context available to all modules
#[derive(Debug, Clone)]
pub struct Context {
    /// Facilitator name passed to the evaluation form
    pub facilitator: String,

    /// Base that hand-off routes are resolved against
    pub base_url: Url,
}

impl Context {
    pub fn new(facilitator: impl Into<String>, base_url: Url) -> Self {
        Self {
            facilitator: facilitator.into(),
            base_url,
        }
    }
}

/// Parse a hand-off base URL. Only URLs that can carry a path are accepted.
pub fn parse_base_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    if url.cannot_be_a_base() {
        return None;
    }
    Some(url)
}

/// The built-in hand-off base.
pub fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base url is valid")
}

impl Default for Context {
    fn default() -> Self {
        Self::new(DEFAULT_FACILITATOR, default_base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url() {
        assert!(parse_base_url("http://localhost:3000").is_some());
        assert!(parse_base_url(" https://meet.example.com/app/ ").is_some());
        assert!(parse_base_url("mailto:someone@example.com").is_none());
        assert!(parse_base_url("not a url").is_none());
    }
}
