//! Boundary-safe term search.
//!
//! A term matches only when the characters on both sides of the hit are either
//! absent (start/end of text) or belong to `BOUNDARY_CHARS` / whitespace.
//! The set deliberately leaves out `:`, `*`, `_`, `#`, `+` and `@`, so
//! "Skills:MySQL" and "**MySQL**" do NOT match "MySQL". That is a known
//! limitation of the scoring model and is covered by tests below.
//!
//! Matching is ASCII case-insensitive and works directly on bytes, so no
//! allocation happens per call.

/// Punctuation treated as a word boundary (in addition to any whitespace).
pub const BOUNDARY_CHARS: &[char] = &[
    ',', '.', ';', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'', '/', '\\', '|', '-', '&',
    '<', '>',
];

/// Returns true if `c` separates words for matching purposes.
pub fn is_boundary_char(c: char) -> bool {
    c.is_whitespace() || BOUNDARY_CHARS.contains(&c)
}

/// Byte offsets of every non-overlapping, boundary-delimited occurrence of
/// `needle` in `haystack`.
pub fn find_boundary_matches<'a>(
    haystack: &'a str,
    needle: &'a str,
) -> impl Iterator<Item = usize> + 'a {
    let needle = needle.trim();
    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();
    let mut pos = 0usize;

    std::iter::from_fn(move || {
        if pat.is_empty() || pat.len() > hay.len() {
            return None;
        }
        while pos + pat.len() <= hay.len() {
            let start = pos;
            let end = start + pat.len();
            if hay[start..end].eq_ignore_ascii_case(pat)
                && haystack.is_char_boundary(start)
                && haystack.is_char_boundary(end)
                && left_is_boundary(haystack, start)
                && right_is_boundary(haystack, end)
            {
                pos = end;
                return Some(start);
            }
            pos += 1;
        }
        None
    })
}

/// True if `needle` occurs in `haystack` with a boundary on both sides.
pub fn contains_term(haystack: &str, needle: &str) -> bool {
    find_boundary_matches(haystack, needle).next().is_some()
}

/// Number of non-overlapping boundary-delimited occurrences.
pub fn count_term(haystack: &str, needle: &str) -> usize {
    find_boundary_matches(haystack, needle).count()
}

fn left_is_boundary(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .map_or(true, is_boundary_char)
}

fn right_is_boundary(text: &str, end: usize) -> bool {
    text[end..].chars().next().map_or(true, is_boundary_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_of_longer_word_does_not_match() {
        assert!(!contains_term("Built RESTful APIs", "REST"));
        assert!(contains_term("Built REST APIs", "REST"));
    }

    #[test]
    fn test_abbreviation_inside_word_does_not_match() {
        assert!(!contains_term("Collected user feedback weekly", "db"));
        assert!(contains_term("Tuned the db indexes", "db"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(contains_term("worked with PYTHON daily", "python"));
    }

    #[test]
    fn test_punctuation_boundaries() {
        assert!(contains_term("(Python, Go)", "Python"));
        assert!(contains_term("Python/Django", "Django"));
        assert!(contains_term("end of sentence Python.", "Python"));
    }

    #[test]
    fn test_colon_and_bold_are_not_boundaries() {
        // Known limitation: these characters are not in the boundary set.
        assert!(!contains_term("Skills:MySQL", "MySQL"));
        assert!(!contains_term("**MySQL**", "MySQL"));
        assert!(contains_term("Skills: MySQL", "MySQL"));
    }

    #[test]
    fn test_plus_suffix_not_a_boundary() {
        assert!(!contains_term("C++ and Java", "C"));
        assert!(contains_term("C++ and Java", "C++"));
    }

    #[test]
    fn test_count_is_non_overlapping() {
        assert_eq!(count_term("go go go", "go"), 3);
        assert_eq!(count_term("Python, python; PYTHON", "Python"), 3);
        assert_eq!(count_term("pythonic", "python"), 0);
    }

    #[test]
    fn test_empty_and_oversized_needles() {
        assert!(!contains_term("anything", ""));
        assert!(!contains_term("ab", "abc"));
        assert!(!contains_term("", "abc"));
    }

    #[test]
    fn test_unicode_text_does_not_panic() {
        let text = "Équipe 🚀 résumé naïve — Python über 日本語";
        assert!(contains_term(text, "Python"));
        assert!(!contains_term(text, "ber"));
        assert!(contains_term(text, "résumé"));
    }

    #[test]
    fn test_regex_special_characters_are_literal() {
        assert!(contains_term("knows C# and .NET (*)", "C#"));
        assert!(!contains_term("abc", "(*"));
    }
}
