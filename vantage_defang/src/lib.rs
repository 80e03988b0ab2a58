// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Defang: ordered regex substitution for neutralizing indicators.
//!
//! Defanging rewrites a URL or address so it can no longer be clicked or
//! resolved by accident (`https://example.com` becomes
//! `hxxps[:]//example[.]com`); undefanging reverses it. Both are driven by an
//! ordered list of [`SubstitutionRule`]s loaded from a [`RuleConfig`].
//!
//! - A [`Pipeline`] folds its rules left to right. Order is part of the
//!   configuration: each rule sees the output of the rules before it.
//! - A rule that fails to compile is skipped and reported as a
//!   [`Diagnostic`]; the rest still run.
//! - A missing rule configuration is not fatal. See
//!   [`RuleConfig::load_or_builtin`].
//! - [`TextTool`] wraps the pipelines with the input/output buffers, status
//!   notifications, clipboard copy and keyboard shortcuts of the text tool.
//!
//! Running a mode twice over its own output is not idempotent.
//!
//! ## Minimal example
//!
//! ```rust
//! use vantage_defang::{Mode, RuleConfig, TextTool};
//!
//! let mut tool = TextTool::new(RuleConfig::builtin());
//! tool.set_input("Visit https://example.com");
//! let notes = tool.process(Mode::Defang);
//!
//! assert_eq!(tool.output(), "Visit hxxps[:]//example[.]com");
//! assert!(notes.last().unwrap().message.starts_with("Successfully defanged!"));
//! ```

mod config;
mod diff;
mod error;
mod html;
mod notify;
mod pipeline;
mod rule;
mod tool;

pub use config::{Mode, RuleConfig};
pub use diff::count_differences;
pub use error::{ClipboardError, ConfigError, RuleError};
pub use html::{escape_html, rule_item_html, rule_list_html};
pub use notify::{Notification, Severity};
pub use pipeline::{Diagnostic, Outcome, Pipeline, apply};
pub use rule::{CompiledRule, Flags, SubstitutionRule};
pub use tool::{Clipboard, EXAMPLE_TEXTS, TextCommand, TextTool};
