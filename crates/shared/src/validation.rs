//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

/// Maximum length of a derived SEO description, in characters.
pub const SEO_DESCRIPTION_CHARS: usize = 160;

lazy_static! {
    static ref SLUG_RE: Regex = Regex::new(r"^[a-z0-9-]+$").expect("valid slug regex");
}

/// Validates that a slug contains only lowercase letters, digits, and hyphens.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if SLUG_RE.is_match(slug) {
        Ok(())
    } else {
        let mut err = ValidationError::new("slug_charset");
        err.message =
            Some("Slug can only contain lowercase letters, numbers, and hyphens".into());
        Err(err)
    }
}

/// Derives a short SEO description: the first 160 characters of the text.
///
/// Truncation counts characters, not bytes, so multi-byte text is never split
/// mid-character.
pub fn seo_excerpt(text: &str) -> String {
    text.chars().take(SEO_DESCRIPTION_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_slug_accepts_valid() {
        assert!(validate_slug("summer-gala-2026").is_ok());
        assert!(validate_slug("a").is_ok());
        assert!(validate_slug("123").is_ok());
        assert!(validate_slug("with-many-hyphens-ok").is_ok());
    }

    #[test]
    fn test_validate_slug_rejects_invalid() {
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Summer-Gala").is_err());
        assert!(validate_slug("with space").is_err());
        assert!(validate_slug("under_score").is_err());
        assert!(validate_slug("unicode-é").is_err());
    }

    #[test]
    fn test_validate_slug_error_message() {
        let err = validate_slug("Bad Slug").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Slug can only contain lowercase letters, numbers, and hyphens"
        );
    }

    #[test]
    fn test_seo_excerpt_short_text_unchanged() {
        assert_eq!(seo_excerpt("short description"), "short description");
    }

    #[test]
    fn test_seo_excerpt_truncates_to_160_chars() {
        let long = "x".repeat(500);
        let excerpt = seo_excerpt(&long);
        assert_eq!(excerpt.chars().count(), 160);
    }

    #[test]
    fn test_seo_excerpt_multibyte_safe() {
        let long = "é".repeat(200);
        let excerpt = seo_excerpt(&long);
        assert_eq!(excerpt.chars().count(), 160);
        assert!(excerpt.chars().all(|c| c == 'é'));
    }
}
