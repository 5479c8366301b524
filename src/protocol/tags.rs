//! Bracketed control tags embedded in reply text.
//!
//! The vocabulary is fixed: five tags, each naming the input affordance the
//! client should present next. Unrecognized bracketed text is ignored for
//! control purposes but still stripped from display.

use std::sync::LazyLock;

use regex::Regex;

/// Matches any bracketed substring, shortest-first.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]").unwrap());

/// A recognized control tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiTag {
    AskName,
    MainMenu,
    AskCareer,
    AskCollege,
    ShowMajors,
}

impl UiTag {
    /// Parse a tag name (the text between the brackets).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ASK_NAME" => Some(Self::AskName),
            "MAIN_MENU" => Some(Self::MainMenu),
            "ASK_CAREER" => Some(Self::AskCareer),
            "ASK_COLLEGE" => Some(Self::AskCollege),
            "SHOW_MAJORS" => Some(Self::ShowMajors),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AskName => "ASK_NAME",
            Self::MainMenu => "MAIN_MENU",
            Self::AskCareer => "ASK_CAREER",
            Self::AskCollege => "ASK_COLLEGE",
            Self::ShowMajors => "SHOW_MAJORS",
        }
    }
}

impl std::fmt::Display for UiTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Recognized tags in document order. Unrecognized bracketed text is skipped.
pub fn extract_tags(text: &str) -> Vec<UiTag> {
    TAG_RE
        .captures_iter(text)
        .filter_map(|caps| UiTag::from_name(&caps[1]))
        .collect()
}

/// Remove every `[...]` substring, recognized or not.
pub fn strip_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

// ── Tests ───────────────────────────────────────────────────────────
