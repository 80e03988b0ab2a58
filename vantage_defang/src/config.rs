// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule configuration documents.
//!
//! ```json
//! {
//!   "defangRules":   [ { "description": "...", "pattern": "\\.", "replacement": "[.]", "flags": "g" } ],
//!   "undefangRules": [ { "description": "...", "pattern": "\\[\\.\\]", "replacement": "." } ]
//! }
//! ```
//!
//! A missing or unreadable document is not fatal: [`RuleConfig::load_or_builtin`]
//! falls back to [`RuleConfig::builtin`] and returns a warning for the user.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::notify::Notification;
use crate::rule::SubstitutionRule;

/// Which rule list to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Neutralize indicators.
    Defang,
    /// Restore neutralized indicators.
    Undefang,
}

impl Mode {
    /// Past-tense verb for status messages.
    #[must_use]
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Defang => "defanged",
            Self::Undefang => "undefanged",
        }
    }
}

/// Ordered defang and undefang rule lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleConfig {
    /// Rules applied by [`Mode::Defang`].
    pub defang_rules: Vec<SubstitutionRule>,
    /// Rules applied by [`Mode::Undefang`].
    pub undefang_rules: Vec<SubstitutionRule>,
}

impl RuleConfig {
    /// Message shown when the built-in rules stand in for a missing document.
    pub const FALLBACK_WARNING: &'static str =
        "Using fallback configuration. Check if config.json is accessible.";

    /// The built-in rules: periods, colons and `http`/`https` schemes.
    ///
    /// The scheme rules keep the letter case of the text they rewrite.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            defang_rules: vec![
                SubstitutionRule::new("Defang periods", r"\.", "[.]", "g"),
                SubstitutionRule::new("Defang colons", ":", "[:]", "g"),
                SubstitutionRule::new("Defang HTTPS", "(h)tt(ps)", "$1xx$2", "gi"),
                SubstitutionRule::new("Defang HTTP", "(h)tt(p)", "$1xx$2", "gi"),
            ],
            undefang_rules: vec![
                SubstitutionRule::new("Undefang periods", r"\[\.\]", ".", "g"),
                SubstitutionRule::new("Undefang colons", r"\[:\]", ":", "g"),
                SubstitutionRule::new("Undefang HXXPS", "(h)xx(ps)", "$1tt$2", "gi"),
                SubstitutionRule::new("Undefang HXXP", "(h)xx(p)", "$1tt$2", "gi"),
            ],
        }
    }

    /// Parses a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON document from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::info!(
            path = %path.display(),
            defang = config.defang_rules.len(),
            undefang = config.undefang_rules.len(),
            "defang.config_loaded"
        );
        Ok(config)
    }

    /// Loads `path`, falling back to the built-in rules on any failure.
    ///
    /// The second element is the warning to show when the fallback was used.
    #[must_use]
    pub fn load_or_builtin(path: impl AsRef<Path>) -> (Self, Option<Notification>) {
        match Self::from_path(path.as_ref()) {
            Ok(config) => (config, None),
            Err(error) => {
                tracing::warn!(
                    path = %path.as_ref().display(),
                    %error,
                    "defang.config_fallback"
                );
                (
                    Self::builtin(),
                    Some(Notification::warning(Self::FALLBACK_WARNING)),
                )
            }
        }
    }

    /// The rule list for `mode`.
    #[must_use]
    pub fn rules(&self, mode: Mode) -> &[SubstitutionRule] {
        match mode {
            Mode::Defang => &self.defang_rules,
            Mode::Undefang => &self.undefang_rules,
        }
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::{Mode, RuleConfig};
    use crate::error::ConfigError;
    use crate::notify::Severity;

    #[test]
    fn parses_camel_case_document_with_optional_flags() {
        let json = r#"{
            "defangRules": [
                { "description": "Dots", "pattern": "\\.", "replacement": "[.]", "flags": "g" }
            ],
            "undefangRules": [
                { "description": "Dots", "pattern": "\\[\\.\\]", "replacement": "." }
            ]
        }"#;
        let config = RuleConfig::from_json(json).unwrap();
        assert_eq!(config.rules(Mode::Defang)[0].flags(), "g");
        assert_eq!(config.rules(Mode::Undefang)[0].flags, None);
        assert_eq!(config.rules(Mode::Undefang)[0].flags(), "g");
    }

    #[test]
    fn malformed_document_is_a_json_error() {
        let err = RuleConfig::from_json("{ \"defangRules\": 3 }").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn missing_file_falls_back_with_warning() {
        let (config, warning) =
            RuleConfig::load_or_builtin("/nonexistent/vantage/config.json");
        assert_eq!(config, RuleConfig::builtin());
        let warning = warning.unwrap();
        assert_eq!(warning.severity, Severity::Warning);
        assert_eq!(warning.message, RuleConfig::FALLBACK_WARNING);
    }

    #[test]
    fn scheme_rules_keep_letter_case() {
        use crate::pipeline::Pipeline;

        let config = RuleConfig::builtin();
        let defang = Pipeline::compile(config.rules(Mode::Defang));
        let undefang = Pipeline::compile(config.rules(Mode::Undefang));

        let text = "HTTP://Example.COM and Https://a.b";
        let defanged = defang.apply(text).text;
        assert_eq!(defanged, "HxxP[:]//Example[.]COM and Hxxps[:]//a[.]b");
        assert_eq!(undefang.apply(&defanged).text, text);
        assert_eq!(
            defang.apply("https://example.com").text,
            "hxxps[:]//example[.]com"
        );
    }

    #[test]
    fn builtin_round_trips_through_json() {
        let json = serde_json::to_string(&RuleConfig::builtin()).unwrap();
        assert!(json.contains("\"defangRules\""));
        assert_eq!(RuleConfig::from_json(&json).unwrap(), RuleConfig::builtin());
    }
}
