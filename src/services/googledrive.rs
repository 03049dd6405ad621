use async_trait::async_trait;
use regex::Regex;

use super::traits::ServiceExtractor;

static PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    // File and folder links. Ids come in two generations: 33 characters
    // starting with `1`, or 28 characters starting with `0`.
    Regex::new(
        r"https?://drive\.google\.com/(folder|file|drive)/(d|folders)/(1[a-zA-Z0-9_-]{32}|0[a-zA-Z0-9_-]{27})",
    )
    .unwrap()
});

pub struct GoogleDriveExtractor;

impl GoogleDriveExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for GoogleDriveExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceExtractor for GoogleDriveExtractor {
    fn service_id(&self) -> &'static str {
        "googledrive"
    }

    fn service_name(&self) -> &'static str {
        "Google Drive"
    }

    fn link_pattern(&self) -> &Regex {
        &PATTERN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOLDER_URL: &str =
        "https://drive.google.com/drive/folders/1AbCdEfGhIjKlMnOpQrStUvWxYz012345";
    const FILE_URL: &str = "https://drive.google.com/file/d/0AbCdEfGhIjKlMnOpQrStUvWxYz0";

    #[test]
    fn test_extract_folder_and_file_links() {
        let service = GoogleDriveExtractor::new();

        let text = format!("folder {FOLDER_URL} and file {FILE_URL}");
        assert_eq!(service.extract(&text), vec![FOLDER_URL, FILE_URL]);
    }

    #[test]
    fn test_extract_rejects_wrong_id_length() {
        let service = GoogleDriveExtractor::new();

        // 8 characters after the leading `1` instead of 32
        assert!(service
            .extract("https://drive.google.com/drive/folders/1tooShort")
            .is_empty());
    }

    #[test]
    fn test_extract_rejects_wrong_id_alphabet() {
        let service = GoogleDriveExtractor::new();

        // Right length, but `!` is outside the id alphabet
        assert!(service
            .extract("https://drive.google.com/drive/folders/1AbCdEfGhIjKlMnOpQrStUvWxYz01234!")
            .is_empty());
    }

    #[test]
    fn test_extract_rejects_lookalike_host() {
        let service = GoogleDriveExtractor::new();

        assert!(service
            .extract("https://drive-google.com/drive/folders/1AbCdEfGhIjKlMnOpQrStUvWxYz012345")
            .is_empty());
    }

    #[test]
    fn test_service_name_used_for_reporting() {
        let service = GoogleDriveExtractor::new();
        assert_eq!(service.service_name(), "Google Drive");
        assert_eq!(service.service_id(), "googledrive");
    }
}
