use async_trait::async_trait;
use regex::Regex;

use super::traits::ServiceExtractor;

static PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    // Album links: an 8-character alphanumeric id
    Regex::new(r"https?://cyberdrop\.me/a/[a-zA-Z0-9]{8}").unwrap()
});

pub struct CyberdropExtractor;

impl CyberdropExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CyberdropExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceExtractor for CyberdropExtractor {
    fn service_id(&self) -> &'static str {
        "cyberdrop"
    }

    fn link_pattern(&self) -> &Regex {
        &PATTERN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract() {
        let service = CyberdropExtractor::new();

        let text = "album at https://cyberdrop.me/a/ZzYyXxWw mirror";
        assert_eq!(service.extract(text), vec!["https://cyberdrop.me/a/ZzYyXxWw"]);
    }

    #[test]
    fn test_extract_no_false_positives() {
        let service = CyberdropExtractor::new();

        // The dot in the host is literal
        assert!(service.extract("https://cyberdropame/a/ZzYyXxWw").is_empty());
        assert!(service
            .extract("https://cyberdrop.me.evil.com/a/ZzYyXxWw")
            .is_empty());

        // Wrong path or id shape
        assert!(service.extract("https://cyberdrop.me/f/ZzYyXxWw").is_empty());
        assert!(service.extract("https://cyberdrop.me/a/abc").is_empty());
    }

    #[test]
    fn test_canonicalize_is_identity() {
        let service = CyberdropExtractor::new();

        let text = "https://cyberdrop.me/a/ZzYyXxWw";
        assert_eq!(service.canonicalize(text), text);
    }
}
