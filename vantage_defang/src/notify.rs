// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

/// How a notification should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// An operation completed.
    Success,
    /// An operation failed.
    Error,
    /// An operation completed in a degraded way, or was refused.
    Warning,
    /// Neutral status.
    Info,
}

/// A transient message for the user.
///
/// Only one notification is on screen at a time; a new one replaces the old.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Presentation.
    pub severity: Severity,
    /// Text shown to the user.
    pub message: String,
}

impl Notification {
    /// How long a notification stays visible, in milliseconds.
    pub const DISPLAY_MS: u32 = 4_000;

    /// Creates a notification.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// A success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// An error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// A warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// An informational notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
