//! Word, sentence, and stopword utilities shared by the scorers and validators.

use std::collections::HashSet;

pub const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are", "as",
    "at", "be", "because", "been", "before", "being", "below", "between", "both", "but", "by",
    "can", "could", "did", "do", "does", "doing", "down", "during", "each", "etc", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "him", "his",
    "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most",
    "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "ours", "out", "over", "own", "same", "she", "should", "so", "some", "such", "than",
    "that", "the", "their", "them", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
];

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

/// Whitespace-separated tokens containing at least one alphanumeric character.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .count()
}

/// Lowercased word tokens. Keeps `+`, `#`, `/` and `.` inside a token so that
/// "c++", "c#", "ci/cd" and "node.js" survive; strips them at the edges.
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#' | '/' | '.' | '\'')))
        .map(|w| w.trim_matches(|c: char| matches!(c, '.' | '/' | '\'')))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Non-stopword words of at least `min_len` characters, deduplicated.
pub fn content_words(text: &str, min_len: usize) -> HashSet<String> {
    words(text)
        .into_iter()
        .filter(|w| w.chars().count() >= min_len && !is_stopword(w))
        .collect()
}

/// Splits prose into sentences on `.`, `!`, `?` followed by whitespace, and on line breaks.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' {
            push_sentence(&mut sentences, &mut current);
            continue;
        }
        current.push(c);
        if matches!(c, '.' | '!' | '?') && chars.peek().map_or(true, |n| n.is_whitespace()) {
            push_sentence(&mut sentences, &mut current);
        }
    }
    push_sentence(&mut sentences, &mut current);
    sentences
}

fn push_sentence(out: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_string());
    }
    current.clear();
}

/// Non-empty paragraphs separated by one or more blank lines.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line.trim());
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_skips_punctuation_tokens() {
        assert_eq!(word_count("Hello — world , again"), 3);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_words_keep_tech_tokens() {
        let w = words("Used C++, C# and CI/CD with Node.js.");
        assert_eq!(w, vec!["used", "c++", "c#", "and", "ci/cd", "with", "node.js"]);
    }

    #[test]
    fn test_content_words_filter_stopwords() {
        let w = content_words("The team built the data pipeline", 3);
        assert!(w.contains("pipeline"));
        assert!(w.contains("team"));
        assert!(!w.contains("the"));
    }

    #[test]
    fn test_split_sentences() {
        let s = split_sentences("First one. Second one!\nThird line\nv1.2 is fine? Yes");
        assert_eq!(s, vec!["First one.", "Second one!", "Third line", "v1.2 is fine?", "Yes"]);
    }

    #[test]
    fn test_split_paragraphs() {
        let p = split_paragraphs("a\nb\n\n\nc\n  \nd");
        assert_eq!(p, vec!["a\nb", "c", "d"]);
    }
}
