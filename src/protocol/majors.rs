//! Numbered-list extraction for the majors picker.
//!
//! When a reply carries `SHOW_MAJORS`, the selectable options are the
//! `N. Label` lines of the rendered text, in document order. Everything
//! else is ignored. Pure string parsing.

use std::sync::LazyLock;

use regex::Regex;

static NUMBERED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*(.+)$").unwrap());

/// Extract `N. Label` labels from rendered text, in document order.
///
/// Lines are trimmed before matching — the server indents the list
/// inconsistently.
pub fn parse_numbered_list(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| NUMBERED_LINE_RE.captures(line.trim()))
        .map(|caps| caps[1].trim_end().to_string())
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────
