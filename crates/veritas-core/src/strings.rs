//! String emptiness and counting helpers used by the validation predicates.

/// Tells whether a string is empty for validation purposes.
///
/// A string is empty when, after stripping whitespace (spaces, tabs and
/// newlines) and every caller-supplied empty token, nothing remains.
/// The `empty_values` list covers placeholder conventions such as `"NULL"`
/// or `"-"` that should count as missing input.
pub fn is_empty(value: &str, empty_values: &[&str]) -> bool {
    let mut remaining: String = value.chars().filter(|c| !c.is_whitespace()).collect();

    if remaining.is_empty() {
        return true;
    }

    for token in empty_values {
        if token.is_empty() {
            continue;
        }

        remaining = remaining.replace(token, "");

        if remaining.is_empty() {
            return true;
        }
    }

    false
}

/// Count the whitespace-separated words in a string.
pub fn count_words(value: &str) -> usize {
    value.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty_whitespace_only() {
        assert!(is_empty("", &[]));
        assert!(is_empty("   ", &[]));
        assert!(is_empty(" \n\r\t ", &[]));
        assert!(!is_empty("a", &[]));
        assert!(!is_empty("  a  ", &[]));
    }

    #[test]
    fn test_is_empty_with_empty_tokens() {
        assert!(is_empty("NULL", &["NULL"]));
        assert!(is_empty("  NULL \n", &["NULL"]));
        assert!(is_empty("-- --", &["-"]));
        assert!(!is_empty("NULL but not quite", &["NULL"]));
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("one"), 1);
        assert_eq!(count_words("two words"), 2);
        assert_eq!(count_words("  spread \n across\tlines "), 3);
    }
}
