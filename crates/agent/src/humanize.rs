//! Formality softening for model replies

/// Replacement table, applied front to back.
const SUBSTITUTIONS: [(&str, &str); 9] = [
    ("I understand that", "I get that"),
    ("I would like to", "I'd like to"),
    ("I am", "I'm"),
    ("you are", "you're"),
    ("it is", "it's"),
    ("that is", "that's"),
    ("do not", "don't"),
    ("cannot", "can't"),
    ("will not", "won't"),
];

/// Rewrite stiff phrasing into contractions and trim the result.
pub fn humanize(text: &str) -> String {
    let mut result = text.to_string();
    for (pattern, replacement) in SUBSTITUTIONS {
        result = result.replace(pattern, replacement);
    }
    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contractions_applied() {
        assert_eq!(humanize("I am happy to help"), "I'm happy to help");
        assert_eq!(humanize("you are all set"), "you're all set");
        assert_eq!(humanize("We cannot do that"), "We can't do that");
    }

    #[test]
    fn test_longer_patterns_win() {
        assert_eq!(
            humanize("I understand that it is hard"),
            "I get that it's hard"
        );
        assert_eq!(humanize("I would like to help"), "I'd like to help");
    }

    #[test]
    fn test_result_is_trimmed() {
        assert_eq!(humanize("  spaced out  "), "spaced out");
    }

    #[test]
    fn test_untouched_text_passes_through() {
        assert_eq!(humanize("Here's the plan."), "Here's the plan.");
    }
}
