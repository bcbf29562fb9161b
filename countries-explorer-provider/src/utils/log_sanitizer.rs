//! Log sanitization utilities
//!
//! `/all` answers with several hundred kilobytes of JSON; debug and error logs
//! only get a prefix of it.

/// Maximum number of characters kept in truncated log output.
const TRUNCATE_LIMIT: usize = 512;

/// Truncate a string for logging.
///
/// Strings of at most `TRUNCATE_LIMIT` characters are returned unchanged,
/// longer ones are cut on a character boundary and suffixed with the total
/// byte length.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = r#"{"status":404,"message":"Not Found"}"#;
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"a".repeat(TRUNCATE_LIMIT)));
        assert!(result.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT + 100)));
    }

    #[test]
    fn multibyte_chars_counted_as_characters() {
        let s = "ü".repeat(TRUNCATE_LIMIT + 1);
        let result = truncate_for_log(&s);
        assert!(result.starts_with(&"ü".repeat(TRUNCATE_LIMIT)));
        assert!(result.contains("... [truncated, total"));
    }
}
