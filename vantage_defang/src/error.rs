// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;

use thiserror::Error;

/// A substitution rule that cannot be compiled.
///
/// Rule errors are per-item: the pipeline skips the rule, reports it, and
/// carries on with the rest.
#[derive(Debug, Clone, Error)]
pub enum RuleError {
    /// The pattern is not a valid regular expression.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The parser's complaint.
        #[source]
        source: regex::Error,
    },
    /// A flag letter that has no equivalent here (`y`, `v`) or is unknown.
    #[error("unsupported flag `{0}`")]
    UnsupportedFlag(char),
    /// A flag letter given more than once.
    #[error("duplicate flag `{0}`")]
    DuplicateFlag(char),
}

/// The rule configuration could not be loaded.
///
/// This is a degraded condition: callers fall back to the built-in rules
/// and warn the user.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read rule configuration: {0}")]
    Io(#[from] io::Error),
    /// The configuration is not valid JSON of the expected shape.
    #[error("failed to parse rule configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writing to the clipboard failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The clipboard is not reachable on this platform or in this context.
    #[error("clipboard unavailable")]
    Unavailable,
    /// The platform refused the write.
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}
