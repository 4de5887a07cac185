//! Input validation for chat titles, message texts, and page limits.
//!
//! Lengths are counted in characters after trimming surrounding whitespace.

use chatapi_types::error::ValidationError;

pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 200;

pub const MIN_TEXT_LENGTH: usize = 1;
pub const MAX_TEXT_LENGTH: usize = 5000;

pub const DEFAULT_MESSAGES_LIMIT: i64 = 20;
pub const MIN_MESSAGES_LIMIT: i64 = 1;
pub const MAX_MESSAGES_LIMIT: i64 = 100;

/// Trim a chat title and check its length. Returns the trimmed title.
pub fn validate_title(title: &str) -> Result<String, ValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }

    let len = title.chars().count();
    if !(MIN_TITLE_LENGTH..=MAX_TITLE_LENGTH).contains(&len) {
        return Err(ValidationError::TitleTooLong);
    }

    Ok(title.to_string())
}

/// Trim a message text and check its length. Returns the trimmed text.
pub fn validate_text(text: &str) -> Result<String, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }

    let len = text.chars().count();
    if !(MIN_TEXT_LENGTH..=MAX_TEXT_LENGTH).contains(&len) {
        return Err(ValidationError::TextTooLong);
    }

    Ok(text.to_string())
}

pub fn validate_limit(limit: i64) -> Result<(), ValidationError> {
    if !(MIN_MESSAGES_LIMIT..=MAX_MESSAGES_LIMIT).contains(&limit) {
        return Err(ValidationError::InvalidLimit);
    }
    Ok(())
}

/// Apply the default page size when no limit was requested, otherwise
/// validate the requested one.
pub fn resolve_limit(limit: Option<i64>) -> Result<i64, ValidationError> {
    match limit {
        None => Ok(DEFAULT_MESSAGES_LIMIT),
        Some(limit) => {
            validate_limit(limit)?;
            Ok(limit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title_accepts_and_trims() {
        assert_eq!(validate_title("Test Chat").unwrap(), "Test Chat");
        assert_eq!(validate_title("  Test Chat  ").unwrap(), "Test Chat");
        assert_eq!(validate_title("\t\nTest\n").unwrap(), "Test");
    }

    #[test]
    fn test_validate_title_rejects_empty() {
        assert_eq!(validate_title(""), Err(ValidationError::EmptyTitle));
        assert_eq!(validate_title("   "), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_validate_title_length_boundary() {
        let max = "a".repeat(MAX_TITLE_LENGTH);
        assert_eq!(validate_title(&max).unwrap(), max);

        let too_long = "a".repeat(MAX_TITLE_LENGTH + 1);
        assert_eq!(validate_title(&too_long), Err(ValidationError::TitleTooLong));

        // Surrounding whitespace does not count toward the limit
        let padded = format!("  {max}  ");
        assert_eq!(validate_title(&padded).unwrap(), max);
    }

    #[test]
    fn test_validate_title_counts_characters_not_bytes() {
        // 200 two-byte characters: 400 bytes, still within bounds
        let title = "é".repeat(MAX_TITLE_LENGTH);
        assert!(validate_title(&title).is_ok());
    }

    #[test]
    fn test_validate_text_accepts_and_trims() {
        assert_eq!(validate_text("Hello, World!").unwrap(), "Hello, World!");
        assert_eq!(validate_text("  Hello, World!  ").unwrap(), "Hello, World!");
    }

    #[test]
    fn test_validate_text_rejects_empty() {
        assert_eq!(validate_text(""), Err(ValidationError::EmptyText));
        assert_eq!(validate_text(" \t "), Err(ValidationError::EmptyText));
    }

    #[test]
    fn test_validate_text_length_boundary() {
        assert!(validate_text(&"a".repeat(MAX_TEXT_LENGTH)).is_ok());
        assert_eq!(
            validate_text(&"a".repeat(MAX_TEXT_LENGTH + 1)),
            Err(ValidationError::TextTooLong)
        );
    }

    #[test]
    fn test_validate_limit_bounds() {
        for limit in [1, 20, 100] {
            assert!(validate_limit(limit).is_ok(), "limit {limit} should be valid");
        }
        for limit in [i64::MIN, -1, 0, 101, i64::MAX] {
            assert_eq!(
                validate_limit(limit),
                Err(ValidationError::InvalidLimit),
                "limit {limit} should be rejected"
            );
        }
    }

    #[test]
    fn test_resolve_limit_defaults_when_absent() {
        assert_eq!(resolve_limit(None).unwrap(), DEFAULT_MESSAGES_LIMIT);
        assert_eq!(resolve_limit(Some(5)).unwrap(), 5);
        assert_eq!(resolve_limit(Some(0)), Err(ValidationError::InvalidLimit));
    }
}
