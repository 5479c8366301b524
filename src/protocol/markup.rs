//! Cleanup for the HTML-ish decoration the server leaves in reply text.
//!
//! The assistant formats replies for a browser: `<br>` line breaks,
//! `<strong>` emphasis, `<h2>` headings, and a few character entities.
//! In a terminal those render literally, so they are rewritten here:
//! breaks become newlines, headings land on their own line, emphasis
//! markers are dropped, and entities are decoded.

use std::sync::LazyLock;

use regex::Regex;

static BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?\s*>").unwrap());
static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?h2>").unwrap());
static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?strong>").unwrap());
static EXCESS_NEWLINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Rewrite markup for terminal display.
pub fn clean_markup(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = BR_RE.replace_all(&text, "\n");
    let text = H2_RE.replace_all(&text, "\n");
    let text = STRONG_RE.replace_all(&text, "");
    let text = decode_entities(&text);

    // Whitespace the browser would have collapsed anyway.
    let text = text
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    let text = EXCESS_NEWLINES_RE.replace_all(&text, "\n\n");
    text.trim().to_string()
}

fn decode_entities(text: &str) -> String {
    // `&amp;` last, so decoded ampersands are not re-expanded.
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn br_becomes_newline() {
        assert_eq!(clean_markup("one<br>two"), "one\ntwo");
    }

    #[test]
    fn br_variants() {
        assert_eq!(clean_markup("a<br/>b<br />c<BR>d"), "a\nb\nc\nd");
    }

    #[test]
    fn double_br_is_blank_line() {
        assert_eq!(clean_markup("para one<br><br>para two"), "para one\n\npara two");
    }

    #[test]
    fn strong_markers_are_dropped() {
        assert_eq!(clean_markup("be <strong>bold</strong> now"), "be bold now");
    }

    #[test]
    fn h2_heading_gets_its_own_line() {
        let out = clean_markup("<h2>APPLICATION PLANNING</h2>• Start Early");
        assert_eq!(out, "APPLICATION PLANNING\n• Start Early");
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(
            clean_markup("Arts &amp; Sciences &lt;2026&gt; &quot;now&quot; it&#39;s&nbsp;here"),
            "Arts & Sciences <2026> \"now\" it's here"
        );
    }

    #[test]
    fn double_encoded_ampersand_decodes_once() {
        assert_eq!(clean_markup("&amp;lt;"), "&lt;");
    }

    #[test]
    fn newline_runs_collapse_to_one_blank_line() {
        assert_eq!(clean_markup("a<br><br><br><br>b"), "a\n\nb");
    }

    #[test]
    fn indentation_is_trimmed() {
        assert_eq!(
            clean_markup("        1. Computer Science\n        2. Data Science"),
            "1. Computer Science\n2. Data Science"
        );
    }

    #[test]
    fn crlf_normalized() {
        assert_eq!(clean_markup("a\r\nb"), "a\nb");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(clean_markup("nothing fancy"), "nothing fancy");
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        assert_eq!(clean_markup("<br><br>hello<br>"), "hello");
    }
}
