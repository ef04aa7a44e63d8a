//! Text helpers shared by the adapters.

/// Keep at most `max_chars` characters, appending `suffix` when anything
/// was cut. Counts characters, not bytes, so multi-byte text never splits.
pub(crate) fn truncate_chars(input: &str, max_chars: usize, suffix: &str) -> String {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}{}", &input[..idx], suffix),
        None => input.to_string(),
    }
}

/// Normalize a path argument: models often wrap paths in quotes.
pub(crate) fn clean_path(input: &str) -> &str {
    input.trim().trim_matches(|c: char| c == '"' || c == '\'' || c == '`').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_unchanged() {
        assert_eq!(truncate_chars("hello", 5, "..."), "hello");
        assert_eq!(truncate_chars("", 0, "..."), "");
    }

    #[test]
    fn test_truncates_with_suffix() {
        assert_eq!(truncate_chars("hello world", 5, "..."), "hello...");
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path("  data.csv \n"), "data.csv");
        assert_eq!(clean_path("'notes/a b.txt'"), "notes/a b.txt");
        assert_eq!(clean_path("\"x.json\""), "x.json");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("héllo wörld", 7, "~"), "héllo w~");
        assert_eq!(truncate_chars("🦀🦀🦀", 2, ""), "🦀🦀");
    }
}
