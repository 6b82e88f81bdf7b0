//! Text normalization and pattern helpers shared by every matcher

use crate::error::Result;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[_\-.]").expect("Invalid separator regex"));

static CAMEL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{Ll})(\p{Lu})").expect("Invalid camelCase regex"));

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s+#/]").expect("Invalid character class regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Canonicalize raw text into the form every matcher works on.
///
/// Steps, in order:
/// 1. Lowercase unless `case_sensitive`
/// 2. `_`, `-` and `.` become spaces
/// 3. A lowercase letter directly followed by an uppercase one is split
/// 4. Anything other than letters, digits, whitespace, `+`, `#` and `/` becomes a space
/// 5. Whitespace runs collapse to one space, then the result is trimmed
///
/// Blank input yields an empty string. The function is idempotent.
pub fn normalize(text: &str, case_sensitive: bool) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let folded = if case_sensitive {
        text.to_string()
    } else {
        text.to_lowercase()
    };

    let separated = SEPARATORS.replace_all(&folded, " ");
    let split = CAMEL_CASE.replace_all(&separated, "${1} ${2}");
    let filtered = DISALLOWED.replace_all(&split, " ");

    WHITESPACE.replace_all(&filtered, " ").trim().to_string()
}

/// Split text into trimmed, non-empty sentences
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.unicode_sentences()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whitespace-delimited tokens of at least `min_chars` characters
pub fn tokens(text: &str, min_chars: usize) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(move |word| word.chars().count() >= min_chars)
}

/// Build a word-boundary pattern for a term.
///
/// Internal whitespace matches one or more whitespace characters and regex
/// metacharacters are escaped. A `\b` anchor is only placed on an end that
/// starts or finishes with a word character, so terms like `c++` and `c#`
/// can still match.
pub fn boundary_pattern(term: &str, case_sensitive: bool) -> Result<Regex> {
    let escaped = term
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");

    let leading = if term.chars().next().is_some_and(is_word_char) { r"\b" } else { "" };
    let trailing = if term.chars().last().is_some_and(is_word_char) { r"\b" } else { "" };

    let pattern = RegexBuilder::new(&format!("{}{}{}", leading, escaped, trailing))
        .case_insensitive(!case_sensitive)
        .build()?;

    Ok(pattern)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_and_case_folding() {
        assert_eq!(normalize("Node.JS_Backend-Dev", false), "node js backend dev");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(normalize("", false), "");
        assert_eq!(normalize("   \n\t ", true), "");
    }

    #[test]
    fn test_camel_case_split_when_case_sensitive() {
        assert_eq!(normalize("camelCaseSkill", true), "camel Case Skill");
        // Case is folded first, so there is nothing left to split
        assert_eq!(normalize("camelCaseSkill", false), "camelcaseskill");
    }

    #[test]
    fn test_allowed_symbols_survive() {
        assert_eq!(normalize("C++, C# & CI/CD!!", false), "c++ c# ci/cd");
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "Senior React.js / TypeScript Engineer (Remote)",
            "aBcD_eF-g.h",
            "  multiple   spaces\tand\nnewlines ",
            "Español, Français & 日本語",
            "C++/C# @ 100% remote",
        ];

        for sample in samples {
            for case_sensitive in [false, true] {
                let once = normalize(sample, case_sensitive);
                assert_eq!(normalize(&once, case_sensitive), once, "sample: {}", sample);
            }
        }
    }

    #[test]
    fn test_sentence_splitting() {
        let sentences = split_sentences("We use Node.js daily. Docker is required! Is Rust a plus?");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0], "We use Node.js daily.");
    }

    #[test]
    fn test_tokens_respect_min_length() {
        let words: Vec<&str> = tokens("go to the rust meetup", 3).collect();
        assert_eq!(words, vec!["the", "rust", "meetup"]);
    }

    #[test]
    fn test_boundary_pattern() {
        let pattern = boundary_pattern("react native", false).unwrap();
        assert!(pattern.is_match("we ship react   native apps"));
        assert!(!pattern.is_match("reactnative"));

        let react = boundary_pattern("react", false).unwrap();
        assert!(!react.is_match("reactjs developer"));
        assert!(react.is_match("React developer"));
    }

    #[test]
    fn test_boundary_pattern_with_symbols() {
        let cpp = boundary_pattern("c++", false).unwrap();
        assert!(cpp.is_match("modern c++ and rust"));
        assert!(!cpp.is_match("abc++"));

        let csharp = boundary_pattern("c#", false).unwrap();
        assert!(csharp.is_match("c# developer"));
    }

    #[test]
    fn test_case_sensitive_pattern() {
        let pattern = boundary_pattern("Rust", true).unwrap();
        assert!(pattern.is_match("Rust"));
        assert!(!pattern.is_match("rust"));
    }
}
