use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Could not extract username from URL")]
    NoUsername,
}

/// Pulls the handle out of a profile URL: the run of characters after `@`,
/// up to the next `/`, `?` or the end of the string.
pub fn extract_username(url: &str) -> Result<String, ValidationError> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"@([^/?]+)").unwrap();
    }

    RE.captures(url)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or(ValidationError::NoUsername)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_username() {
        assert_eq!(
            extract_username("https://www.tiktok.com/@alice/video/123").unwrap(),
            "alice"
        );
        assert_eq!(
            extract_username("https://www.tiktok.com/@bob.smith?lang=en").unwrap(),
            "bob.smith"
        );
        assert_eq!(extract_username("https://www.tiktok.com/@carol").unwrap(), "carol");
    }

    #[test]
    fn test_extract_username_rejects_bad_urls() {
        assert!(extract_username("https://www.tiktok.com/noat").is_err());
        assert!(extract_username("https://www.tiktok.com/@/video/123").is_err());
        assert!(extract_username("").is_err());
    }
}
