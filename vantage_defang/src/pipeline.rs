// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered rule application.
//!
//! Rules fold left to right: each one sees the previous rule's output, so the
//! order of a rule list is part of its meaning. A rule that fails to compile
//! is skipped and reported; the remaining rules still run.

use std::borrow::Cow;

use crate::error::RuleError;
use crate::rule::{CompiledRule, SubstitutionRule};

/// A rule that was skipped, and why.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Position of the rule in its list.
    pub index: usize,
    /// The rule's description.
    pub description: String,
    /// What went wrong.
    pub error: RuleError,
}

/// Result of running a pipeline over some text.
#[derive(Clone, Debug)]
pub struct Outcome {
    /// The transformed text.
    pub text: String,
    /// Number of rules that ran (whether or not they matched).
    pub applied: usize,
    /// Rules that were skipped.
    pub diagnostics: Vec<Diagnostic>,
}

impl Outcome {
    /// Returns `true` if every rule ran.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A compiled, ordered list of substitution rules.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    steps: Vec<Result<CompiledRule, Diagnostic>>,
}

impl Pipeline {
    /// Compiles `rules` in order. Rules that fail to compile are kept as
    /// diagnostics in their position so every run reports them.
    #[must_use]
    pub fn compile(rules: &[SubstitutionRule]) -> Self {
        let steps = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                rule.compile().map_err(|error| {
                    tracing::error!(
                        index,
                        rule = %rule.description,
                        %error,
                        "defang.rule_invalid"
                    );
                    Diagnostic {
                        index,
                        description: rule.description.clone(),
                        error,
                    }
                })
            })
            .collect();
        Self { steps }
    }

    /// Number of rules, including skipped ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the pipeline has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Rules that will be skipped on every run.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.steps.iter().filter_map(|s| s.as_ref().err())
    }

    /// Runs the rules over `text`.
    #[must_use]
    pub fn apply(&self, text: &str) -> Outcome {
        let mut current = Cow::Borrowed(text);
        let mut applied = 0;
        let mut diagnostics = Vec::new();
        for step in &self.steps {
            match step {
                Ok(rule) => {
                    let next = match rule.apply(&current) {
                        Cow::Owned(next) => Some(next),
                        Cow::Borrowed(_) => None,
                    };
                    if let Some(next) = next {
                        current = Cow::Owned(next);
                    }
                    applied += 1;
                }
                Err(diagnostic) => diagnostics.push(diagnostic.clone()),
            }
        }
        tracing::debug!(
            rules = self.steps.len(),
            applied,
            skipped = diagnostics.len(),
            "defang.apply"
        );
        Outcome {
            text: current.into_owned(),
            applied,
            diagnostics,
        }
    }
}

/// Compiles `rules` and runs them over `text` once.
#[must_use]
pub fn apply(text: &str, rules: &[SubstitutionRule]) -> Outcome {
    Pipeline::compile(rules).apply(text)
}
