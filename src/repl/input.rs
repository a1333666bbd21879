//! Input normalization for the command loop

/// Splits a line on whitespace and lower-cases every word
///
/// Blank input yields an empty vector.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word() {
        assert_eq!(clean_input("hello"), vec!["hello"]);
    }

    #[test]
    fn test_collapses_surrounding_and_internal_spaces() {
        assert_eq!(clean_input("  hello   world  "), vec!["hello", "world"]);
    }

    #[test]
    fn test_lowercases_mixed_case() {
        assert_eq!(clean_input(" HeLlO wOrLd "), vec!["hello", "world"]);
    }

    #[test]
    fn test_splits_on_tabs_and_newlines() {
        assert_eq!(
            clean_input("  word1\tword2\nword3  "),
            vec!["word1", "word2", "word3"]
        );
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert!(clean_input("").is_empty());
        assert!(clean_input(" ").is_empty());
        assert!(clean_input("\t\t").is_empty());
    }

    #[test]
    fn test_keeps_punctuation_and_digits() {
        assert_eq!(clean_input("PokE-fETch!"), vec!["poke-fetch!"]);
        assert_eq!(clean_input("c0mmand 123"), vec!["c0mmand", "123"]);
    }
}
