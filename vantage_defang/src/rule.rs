// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Substitution rules and their compiled form.
//!
//! Rules are written in the dialect of browser regular expressions: a pattern,
//! a replacement template using `$` references, and a string of flag letters.
//! Compilation translates flags and templates into [`regex`] terms once, so a
//! compiled rule can be applied to any number of inputs.

use std::borrow::Cow;
use std::fmt;

use regex::{Captures, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::RuleError;

/// One substitution rule as configured.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    /// Human-readable summary, used in listings and diagnostics.
    pub description: String,
    /// Regular expression to search for.
    pub pattern: String,
    /// Replacement template.
    pub replacement: String,
    /// Flag letters; `None` means `"g"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,
}

impl SubstitutionRule {
    /// Creates a rule.
    pub fn new(
        description: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
        flags: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            pattern: pattern.into(),
            replacement: replacement.into(),
            flags: Some(flags.into()),
        }
    }

    /// The flag letters in effect.
    #[must_use]
    pub fn flags(&self) -> &str {
        match self.flags.as_deref() {
            Some("") | None => Flags::DEFAULT,
            Some(flags) => flags,
        }
    }

    /// Compiles the rule.
    pub fn compile(&self) -> Result<CompiledRule, RuleError> {
        let flags = Flags::parse(self.flags())?;
        let regex = RegexBuilder::new(&self.pattern)
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_all)
            .build()
            .map_err(|source| RuleError::InvalidPattern {
                pattern: self.pattern.clone(),
                source,
            })?;
        let template = Template::parse(&self.replacement, &regex);
        Ok(CompiledRule {
            description: self.description.clone(),
            regex,
            template,
            global: flags.global,
        })
    }
}

/// Parsed flag letters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// `g`: replace every match rather than the first.
    pub global: bool,
    /// `i`: ignore case.
    pub case_insensitive: bool,
    /// `m`: `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `s`: `.` matches newlines.
    pub dot_all: bool,
}

impl Flags {
    /// Flags used when a rule names none.
    pub const DEFAULT: &'static str = "g";

    /// Parses flag letters.
    ///
    /// `u` is accepted and has no effect (matching is always Unicode-aware),
    /// as is `d`. `y` and `v` have no equivalent and are rejected, as is any
    /// letter that repeats.
    pub fn parse(letters: &str) -> Result<Self, RuleError> {
        let mut flags = Self::default();
        let mut seen = String::with_capacity(letters.len());
        for c in letters.chars() {
            if seen.contains(c) {
                return Err(RuleError::DuplicateFlag(c));
            }
            seen.push(c);
            match c {
                'g' => flags.global = true,
                'i' => flags.case_insensitive = true,
                'm' => flags.multi_line = true,
                's' => flags.dot_all = true,
                'u' | 'd' => {}
                other => return Err(RuleError::UnsupportedFlag(other)),
            }
        }
        Ok(flags)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Match,
    Before,
    After,
    Group(usize),
    Named(String),
}

/// A replacement template resolved against a pattern's capture groups.
///
/// `$$` is a literal `$`, `$&` the whole match, `` $` `` the text before the
/// match, `$'` the text after it, `$1`..`$99` numbered groups and `$<name>`
/// named groups. References to groups the pattern does not have stay literal.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    fn parse(replacement: &str, regex: &Regex) -> Self {
        let groups = regex.captures_len() - 1;
        let has_names = regex.capture_names().flatten().next().is_some();
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let bytes = replacement.as_bytes();
        let mut i = 0;
        while i < replacement.len() {
            let Some(rel) = replacement[i..].find('$') else {
                literal.push_str(&replacement[i..]);
                break;
            };
            literal.push_str(&replacement[i..i + rel]);
            i += rel;
            let (piece, consumed) = match bytes.get(i + 1) {
                Some(b'$') => (Some(Piece::Literal("$".into())), 2),
                Some(b'&') => (Some(Piece::Match), 2),
                Some(b'`') => (Some(Piece::Before), 2),
                Some(b'\'') => (Some(Piece::After), 2),
                Some(d) if d.is_ascii_digit() => group_ref(bytes, i, groups),
                Some(b'<') if has_names => match replacement[i + 2..].find('>') {
                    Some(end) => (
                        Some(Piece::Named(replacement[i + 2..i + 2 + end].to_string())),
                        end + 3,
                    ),
                    None => (None, 1),
                },
                _ => (None, 1),
            };
            match piece {
                Some(Piece::Literal(s)) => literal.push_str(&s),
                Some(piece) => {
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(piece);
                }
                None => literal.push('$'),
            }
            i += consumed;
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }
        Self { pieces }
    }

    /// The template as a plain string, if it has no references.
    fn as_literal(&self) -> Option<&str> {
        match self.pieces.as_slice() {
            [] => Some(""),
            [Piece::Literal(s)] => Some(s),
            _ => None,
        }
    }

    fn expand(&self, haystack: &str, caps: &Captures<'_>, dst: &mut String) {
        let Some(whole) = caps.get(0) else {
            return;
        };
        for piece in &self.pieces {
            match piece {
                Piece::Literal(s) => dst.push_str(s),
                Piece::Match => dst.push_str(whole.as_str()),
                Piece::Before => dst.push_str(&haystack[..whole.start()]),
                Piece::After => dst.push_str(&haystack[whole.end()..]),
                Piece::Group(n) => {
                    if let Some(m) = caps.get(*n) {
                        dst.push_str(m.as_str());
                    }
                }
                Piece::Named(name) => {
                    if let Some(m) = caps.name(name) {
                        dst.push_str(m.as_str());
                    }
                }
            }
        }
    }
}

/// Resolves `$n` or `$nn` at `bytes[i]`, preferring two digits when that group exists.
fn group_ref(bytes: &[u8], i: usize, groups: usize) -> (Option<Piece>, usize) {
    let first = usize::from(bytes[i + 1] - b'0');
    if let Some(second) = bytes.get(i + 2).filter(|b| b.is_ascii_digit()) {
        let two = first * 10 + usize::from(second - b'0');
        if (1..=groups).contains(&two) {
            return (Some(Piece::Group(two)), 3);
        }
    }
    if (1..=groups).contains(&first) {
        (Some(Piece::Group(first)), 2)
    } else {
        (None, 1)
    }
}

/// A rule ready to apply.
#[derive(Clone, Debug)]
pub struct CompiledRule {
    description: String,
    regex: Regex,
    template: Template,
    global: bool,
}

impl CompiledRule {
    /// The rule's description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns `true` if the rule replaces every match.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.global
    }

    /// Applies the rule to `text`, borrowing when nothing matched.
    #[must_use]
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let limit = if self.global { 0 } else { 1 };
        if let Some(literal) = self.template.as_literal() {
            return self.regex.replacen(text, limit, regex::NoExpand(literal));
        }
        self.regex.replacen(text, limit, |caps: &Captures<'_>| {
            let mut out = String::new();
            self.template.expand(text, caps, &mut out);
            out
        })
    }
}

impl fmt::Display for SubstitutionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: /{}/{} -> {}",
            self.description,
            self.pattern,
            self.flags(),
            self.replacement
        )
    }
}
