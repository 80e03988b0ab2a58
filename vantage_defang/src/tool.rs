// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The defang/undefang text tool.
//!
//! [`TextTool`] owns an input buffer, an output buffer and compiled pipelines
//! for both modes. Every user action returns the notifications to show, in
//! order; the host decides how to present them (only the last one stays on
//! screen).

use ui_events::keyboard::{Key, KeyState, Modifiers};

use crate::config::{Mode, RuleConfig};
use crate::diff::count_differences;
use crate::error::ClipboardError;
use crate::notify::Notification;
use crate::pipeline::Pipeline;

/// Destination for copied text.
pub trait Clipboard {
    /// Writes `text` through the platform clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Second attempt after [`write_text`](Self::write_text) failed, such as
    /// selecting the output and issuing a legacy copy command.
    fn write_text_fallback(&mut self, text: &str) -> Result<(), ClipboardError> {
        let _ = text;
        Err(ClipboardError::Unavailable)
    }
}

/// Actions bound to keyboard shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextCommand {
    /// Run the defang rules.
    Defang,
    /// Run the undefang rules.
    Undefang,
    /// Clear both buffers.
    Clear,
}

impl TextCommand {
    /// Maps Ctrl/Cmd + `d`, `u` or `k` to a command.
    ///
    /// A match means the platform's default action must be suppressed.
    #[must_use]
    pub fn from_shortcut(key: &Key, state: KeyState, modifiers: Modifiers) -> Option<Self> {
        if !state.is_down() || !(modifiers.ctrl() || modifiers.meta()) {
            return None;
        }
        let Key::Character(c) = key else {
            return None;
        };
        match c.to_ascii_lowercase().as_str() {
            "d" => Some(Self::Defang),
            "u" => Some(Self::Undefang),
            "k" => Some(Self::Clear),
            _ => None,
        }
    }
}

/// Sample inputs offered to first-time users.
pub const EXAMPLE_TEXTS: [&str; 3] = [
    "https://malicious-site.com/path?param=value",
    "Visit http://example.com or email admin@test.org",
    "Server IP: 192.168.1.100:8080",
];

/// Input and output buffers with the rules that turn one into the other.
#[derive(Debug)]
pub struct TextTool {
    config: RuleConfig,
    defang: Pipeline,
    undefang: Pipeline,
    input: String,
    output: String,
}

impl TextTool {
    /// Creates a tool running the rules in `config`.
    #[must_use]
    pub fn new(config: RuleConfig) -> Self {
        let defang = Pipeline::compile(&config.defang_rules);
        let undefang = Pipeline::compile(&config.undefang_rules);
        Self {
            config,
            defang,
            undefang,
            input: String::new(),
            output: String::new(),
        }
    }

    /// The rules in use.
    #[must_use]
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// The compiled pipeline for `mode`.
    #[must_use]
    pub fn pipeline(&self, mode: Mode) -> &Pipeline {
        match mode {
            Mode::Defang => &self.defang,
            Mode::Undefang => &self.undefang,
        }
    }

    /// The input buffer.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the input buffer.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// The output buffer.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Runs the rules for `mode` over the trimmed input.
    ///
    /// Empty input leaves the output alone and produces a single warning.
    /// Otherwise each skipped rule produces an error notification, followed by
    /// a success notification with the approximate number of changes.
    pub fn process(&mut self, mode: Mode) -> Vec<Notification> {
        let input = self.input.trim();
        if input.is_empty() {
            return vec![Notification::warning("Please enter some text to process.")];
        }
        let outcome = self.pipeline(mode).apply(input);
        let changes = count_differences(input, &outcome.text);
        let mut notes: Vec<_> = outcome
            .diagnostics
            .iter()
            .map(|d| Notification::error(format!("Error applying rule: {}", d.description)))
            .collect();
        notes.push(Notification::success(format!(
            "Successfully {}! {changes} changes made.",
            mode.past_tense()
        )));
        tracing::debug!(?mode, changes, skipped = outcome.diagnostics.len(), "defang.process");
        self.output = outcome.text;
        notes
    }

    /// Runs the command bound to a shortcut.
    pub fn run(&mut self, command: TextCommand) -> Vec<Notification> {
        match command {
            TextCommand::Defang => self.process(Mode::Defang),
            TextCommand::Undefang => self.process(Mode::Undefang),
            TextCommand::Clear => vec![self.clear()],
        }
    }

    /// Empties both buffers.
    pub fn clear(&mut self) -> Notification {
        self.input.clear();
        self.output.clear();
        Notification::info("Text cleared.")
    }

    /// Copies the output, trying the clipboard's fallback if the primary
    /// write fails.
    pub fn copy_output(&self, clipboard: &mut impl Clipboard) -> Notification {
        if self.output.trim().is_empty() {
            return Notification::warning("No text to copy.");
        }
        let copied = clipboard.write_text(&self.output).or_else(|error| {
            tracing::warn!(%error, "defang.clipboard_primary_failed");
            clipboard.write_text_fallback(&self.output)
        });
        match copied {
            Ok(()) => Notification::success("Text copied to clipboard!"),
            Err(error) => {
                tracing::error!(%error, "defang.clipboard_failed");
                Notification::error("Please manually select and copy the text.")
            }
        }
    }
}

impl Default for TextTool {
    fn default() -> Self {
        Self::new(RuleConfig::builtin())
    }
}
