//! Text Normalizer: cleans scraped job-description text before segmentation.

use once_cell::sync::Lazy;
use regex::Regex;

/// "team.We" / "(remote)Apply" / "Requirements:Python" → inserts the missing space.
/// Requires a capitalised word start after the punctuation so "ASP.NET" survives.
static CONCATENATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z0-9)][.:;)])([A-Z][a-z])").expect("concatenation regex"));

static HORIZONTAL_WS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t\u{00A0}\u{2000}-\u{200A}\u{202F}\u{205F}\u{3000}]+").expect("whitespace regex"));

static BLANK_LINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("blank line regex"));

const INVISIBLE: &[char] = &[
    '\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}', '\u{00AD}',
];

/// Cleans raw JD text: strips invisible characters, maps typographic quotes and
/// dashes to ASCII, repairs missing spaces between concatenated sentences, and
/// collapses whitespace while keeping paragraph breaks. Idempotent.
pub fn normalize_jd_text(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let mut text: String = raw
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter(|c| !INVISIBLE.contains(c))
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}' | '\u{2032}' => '\'',
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{201F}' | '\u{2033}' => '"',
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}'
            | '\u{2212}' => '-',
            other => other,
        })
        .collect();
    text = text.replace('\u{2026}', "...");

    // Repeat until stable: "a.B.C" style chains need more than one pass.
    loop {
        let repaired = CONCATENATION_RE.replace_all(&text, "$1 $2").into_owned();
        if repaired == text {
            break;
        }
        text = repaired;
    }

    let text = HORIZONTAL_WS_RE.replace_all(&text, " ");
    let lines: Vec<&str> = text.split('\n').map(str::trim).collect();
    let joined = lines.join("\n");
    BLANK_LINES_RE
        .replace_all(&joined, "\n\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(normalize_jd_text(""), "");
        assert_eq!(normalize_jd_text("  \n\t "), "");
    }

    #[test]
    fn test_repairs_concatenated_sentences() {
        assert_eq!(
            normalize_jd_text("You will own the platform.We move fast."),
            "You will own the platform. We move fast."
        );
        assert_eq!(
            normalize_jd_text("Requirements:Python and Go"),
            "Requirements: Python and Go"
        );
        assert_eq!(normalize_jd_text("Remote (US)Apply now"), "Remote (US) Apply now");
    }

    #[test]
    fn test_keeps_dotted_names() {
        assert_eq!(normalize_jd_text("ASP.NET and Node.js"), "ASP.NET and Node.js");
    }

    #[test]
    fn test_normalizes_quotes_and_dashes() {
        assert_eq!(
            normalize_jd_text("\u{201C}Senior\u{201D} engineer \u{2014} it\u{2019}s great\u{2026}"),
            "\"Senior\" engineer - it's great..."
        );
    }

    #[test]
    fn test_strips_invisible_and_collapses_whitespace() {
        let raw = "Build\u{200B}   things\t\tfast\r\n\r\n\r\n\r\nShip\u{00A0} it  ";
        assert_eq!(normalize_jd_text(raw), "Build things fast\n\nShip it");
    }

    #[test]
    fn test_idempotent() {
        let raw = "About the role:We build.Things\u{2014}fast\n\n\n\n  Requirements:Rust ";
        let once = normalize_jd_text(raw);
        assert_eq!(normalize_jd_text(&once), once);
    }
}
