//! Line input for the chat loop.
//!
//! The loop reads through the [`LineSource`] trait so tests can script
//! input; [`ReadlineSource`] is the interactive implementation backed by
//! [`rustyline`] with persistent history.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

use crate::config::Config;

/// One event from the user's terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// End of input (Ctrl+D, closed pipe).
    Closed,
    /// Ctrl+C at the prompt.
    Interrupted,
}

/// A source of user input lines.
pub trait LineSource {
    /// Shows `prompt` and blocks until the user submits a line or input ends.
    fn read_line(&mut self, prompt: &str) -> Input;

    /// Records a submitted line for recall. No-op by default.
    fn remember(&mut self, _line: &str) {}
}

/// Interactive line editor with history persisted to the cache directory.
pub struct ReadlineSource {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl ReadlineSource {
    /// Creates the editor and loads history from
    /// `~/.cache/kindabot/chat_history.txt` when it exists.
    pub fn new() -> Result<Self> {
        let mut editor = DefaultEditor::new()?;
        let history_path = Config::cache_dir()
            .map(|dir| dir.join(crate::constants::HISTORY_FILENAME))
            .ok();
        if let Some(ref path) = history_path {
            if path.exists() {
                let _ = editor.load_history(path);
            }
        }
        Ok(Self {
            editor,
            history_path,
        })
    }

    /// Writes readline history back to disk.
    pub fn save_history(&mut self) -> Result<()> {
        let Some(ref path) = self.history_path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.editor.save_history(path)?;
        Ok(())
    }
}

impl LineSource for ReadlineSource {
    fn read_line(&mut self, prompt: &str) -> Input {
        match self.editor.readline(prompt) {
            Ok(line) => Input::Line(line),
            Err(ReadlineError::Interrupted) => Input::Interrupted,
            Err(ReadlineError::Eof) => Input::Closed,
            Err(e) => {
                tracing::warn!("readline failed, ending session: {e}");
                Input::Closed
            }
        }
    }

    fn remember(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}
