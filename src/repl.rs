//! Interactive loop — reads lines, forwards them, renders what comes back.
//!
//! One request in flight at a time, by construction: the loop does not read
//! the next line until the previous turn has fully rendered.

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::{ChatApi, ChatReply};
use crate::error::Result;
use crate::protocol::{display_text, extract_tags};
use crate::session::SessionStore;
use crate::ui::render::Renderer;
use crate::ui::state::UiState;

/// The chat loop and everything it owns.
pub struct Repl {
    api: ChatApi,
    sessions: SessionStore,
    renderer: Renderer,
    state: UiState,
    session_id: Option<String>,
}

impl Repl {
    pub fn new(api: ChatApi, sessions: SessionStore, renderer: Renderer) -> Self {
        Self {
            api,
            sessions,
            renderer,
            state: UiState::new(),
            session_id: None,
        }
    }

    /// Run until EOF or `/quit`.
    pub async fn run(&mut self) -> Result<()> {
        self.session_id = self.sessions.load().map(|s| s.session_id);
        match &self.session_id {
            None => self.bootstrap().await,
            Some(id) => {
                tracing::info!(session_id = %id, "Resuming stored session");
                println!("\n(resuming your previous session — /reset starts over)\n");
            }
        }

        let stdin = tokio::io::stdin();
        let mut lines = BufReader::new(stdin).lines();

        eprint!("> ");
        while let Some(line) = lines.next_line().await? {
            let line = line.trim().to_string();
            if line.is_empty() {
                eprint!("> ");
                continue;
            }
            match line.as_str() {
                "/quit" => break,
                "/reset" => self.reset().await,
                _ => self.turn(&line).await,
            }
            eprint!("> ");
        }
        Ok(())
    }

    /// Open a fresh conversation and render the greeting.
    async fn bootstrap(&mut self) {
        match self.api.init().await {
            Ok(reply) => self.absorb(reply).await,
            Err(e) => {
                tracing::warn!(error = %e, "INIT request failed");
                self.renderer.render_error();
            }
        }
    }

    /// Drop the stored session and start over.
    async fn reset(&mut self) {
        if let Err(e) = self.sessions.clear() {
            tracing::warn!(error = %e, "Failed to clear session file");
        }
        self.session_id = None;
        self.state = UiState::new();
        self.bootstrap().await;
    }

    /// One user turn: resolve the line, send it, render the outcome.
    async fn turn(&mut self, line: &str) {
        let message = self.state.resolve_input(line);
        match self.api.send(&message, self.session_id.as_deref()).await {
            Ok(reply) => self.absorb(reply).await,
            Err(e) => {
                // One error bubble; surface and stored token stay as they were.
                tracing::warn!(error = %e, "Chat request failed");
                self.renderer.render_error();
            }
        }
    }

    /// Apply a successful reply: token, bubbles, then the input surface.
    async fn absorb(&mut self, reply: ChatReply) {
        let merged = reply.merge_session_id(self.session_id.as_deref());
        if merged != self.session_id {
            if let Some(id) = &merged {
                if let Err(e) = self.sessions.save(id) {
                    tracing::warn!(error = %e, "Failed to persist session token");
                }
            }
            self.session_id = merged;
        }

        self.renderer.render_reply(&reply.response).await;

        let tags = extract_tags(&reply.response);
        self.state.apply(&tags, &display_text(&reply.response));
        self.renderer.render_surface(self.state.surface());
    }
}

// ── Tests ───────────────────────────────────────────────────────────
