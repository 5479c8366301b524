//! Input surface state — which affordance is active after each reply.
//!
//! The browser widget toggled three regions (menu buttons, majors buttons,
//! free-text input); here the same convention is structural: an enum with
//! one active variant. Tags apply in document order, last recognized wins,
//! and a reply with no recognized tag leaves the surface alone.

use crate::protocol::majors::parse_numbered_list;
use crate::protocol::tags::UiTag;

/// The fixed main-menu options the server recognizes.
pub const MENU_OPTIONS: [&str; 3] = [
    "Explore Careers and Majors",
    "Research Colleges",
    "Get Application Advice",
];

/// The single active input affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSurface {
    /// Free-text entry.
    Text,
    /// The fixed main-menu options.
    Menu,
    /// Majors parsed out of the last reply, in document order.
    Majors(Vec<String>),
}

impl Default for InputSurface {
    fn default() -> Self {
        Self::Text
    }
}

/// Tracks the active surface across turns.
#[derive(Debug, Default)]
pub struct UiState {
    surface: InputSurface,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surface(&self) -> &InputSurface {
        &self.surface
    }

    /// Apply a reply's tags in document order; the last recognized tag wins.
    ///
    /// `rendered` is the display text of the whole reply — `SHOW_MAJORS`
    /// reads its options out of it.
    pub fn apply(&mut self, tags: &[UiTag], rendered: &str) {
        for tag in tags {
            self.surface = match tag {
                UiTag::AskName | UiTag::AskCareer | UiTag::AskCollege => InputSurface::Text,
                UiTag::MainMenu => InputSurface::Menu,
                UiTag::ShowMajors => {
                    let majors = parse_numbered_list(rendered);
                    if majors.is_empty() {
                        // An empty picker is dead UI; let the user type.
                        tracing::warn!("SHOW_MAJORS reply carried no numbered list");
                        InputSurface::Text
                    } else {
                        InputSurface::Majors(majors)
                    }
                }
            };
        }
    }

    /// Map a typed line to the outgoing message for the active surface.
    ///
    /// Menu picks must reach the server as the option label (that is what it
    /// matches on), so digits and case-insensitive label matches are
    /// canonicalized. Majors accept either the index or the name server-side,
    /// so only name casing is canonicalized. Anything unrecognized passes
    /// through — the server re-prompts.
    pub fn resolve_input(&self, line: &str) -> String {
        let line = line.trim();
        match &self.surface {
            InputSurface::Text => line.to_string(),
            InputSurface::Menu => {
                if let Some(option) = pick_by_number(line, &MENU_OPTIONS) {
                    return option.to_string();
                }
                MENU_OPTIONS
                    .iter()
                    .find(|option| option.eq_ignore_ascii_case(line))
                    .map(|option| option.to_string())
                    .unwrap_or_else(|| line.to_string())
            }
            InputSurface::Majors(majors) => majors
                .iter()
                .find(|major| major.eq_ignore_ascii_case(line))
                .map(|major| major.to_string())
                .unwrap_or_else(|| line.to_string()),
        }
    }
}

fn pick_by_number<'a>(line: &str, options: &'a [&'a str]) -> Option<&'a str> {
    let index: usize = line.parse().ok()?;
    (1..=options.len())
        .contains(&index)
        .then(|| options[index - 1])
}

// ── Tests ───────────────────────────────────────────────────────────
