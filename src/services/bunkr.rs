use async_trait::async_trait;
use regex::Regex;

use super::traits::ServiceExtractor;

static PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    // Album links: an 8-character alphanumeric id on the active domain
    Regex::new(r"https?://bunkrr\.su/a/[a-zA-Z0-9]{8}").unwrap()
});

/// Domains bunkr has burned through, each rewritten to the active one.
const ALIASES: &[(&str, &str)] = &[
    ("bunkr.is", "bunkrr.su"),
    ("bunkr.ru", "bunkrr.su"),
    ("bunkr.su", "bunkrr.su"),
    ("bunkr.la", "bunkrr.su"),
];

pub struct BunkrExtractor;

impl BunkrExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for BunkrExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceExtractor for BunkrExtractor {
    fn service_id(&self) -> &'static str {
        "bunkr"
    }

    fn link_pattern(&self) -> &Regex {
        &PATTERN
    }

    fn domain_aliases(&self) -> &[(&'static str, &'static str)] {
        ALIASES
    }
}
