//! Text helpers shared by the graph builder and the poem assembler.

/// Normalize a word to the canonical case used for graph labels.
pub fn fold_case(word: &str) -> String {
    word.to_lowercase()
}

/// Split text on runs of whitespace. Punctuation stays attached to its word,
/// so `"beautiful."` and `"beautiful"` remain distinct.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_case_lowercases_unicode() {
        assert_eq!(fold_case("ÉCOLE Mugar"), "école mugar");
    }

    #[test]
    fn split_words_keeps_punctuation() {
        assert_eq!(
            split_words("  Test the\tsystem.\n"),
            vec!["Test", "the", "system."]
        );
    }

    #[test]
    fn split_words_on_blank_text_is_empty() {
        assert!(split_words(" \n\t ").is_empty());
    }
}
