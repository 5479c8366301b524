//! Bubble rendering — reply sections to stdout, staggered like the widget.

use std::time::Duration;

use crate::protocol::{display_text, split_sections};
use crate::ui::state::{InputSurface, MENU_OPTIONS};

/// The one generic failure bubble. No retry, no error taxonomy.
pub const ERROR_BUBBLE: &str = "Sorry, I encountered an error. Please try again.";

/// Bubble texts for a reply: sections split, cleaned, empties dropped,
/// document order kept.
pub fn bubbles(response: &str) -> Vec<String> {
    split_sections(response)
        .into_iter()
        .map(display_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Prints bubbles and input hints to the terminal.
pub struct Renderer {
    bubble_delay: Duration,
}

impl Renderer {
    pub fn new(bubble_delay: Duration) -> Self {
        Self { bubble_delay }
    }

    /// Render one reply as sequential bubbles. Returns how many were shown.
    pub async fn render_reply(&self, response: &str) -> usize {
        let bubbles = bubbles(response);
        for (i, text) in bubbles.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.bubble_delay).await;
            }
            print_bubble(text);
        }
        bubbles.len()
    }

    /// Render the single generic error bubble.
    pub fn render_error(&self) {
        print_bubble(ERROR_BUBBLE);
    }

    /// Show the hint for whatever the user can do next.
    pub fn render_surface(&self, surface: &InputSurface) {
        match surface {
            InputSurface::Text => {}
            InputSurface::Menu => {
                for (i, option) in MENU_OPTIONS.iter().enumerate() {
                    println!("  {}. {option}", i + 1);
                }
                println!();
            }
            InputSurface::Majors(majors) => {
                println!("  (choose 1-{} or type the major name)\n", majors.len());
            }
        }
    }
}

fn print_bubble(text: &str) {
    println!("\n{text}\n");
}

// ── Tests ───────────────────────────────────────────────────────────
