// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML rendering of rule listings.

use std::fmt::Write as _;

use crate::rule::SubstitutionRule;

/// Escapes `&`, `<`, `>`, `"` and `'` for inclusion in HTML text or attributes.
///
/// ```
/// use vantage_defang::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">'&'</a>"#),
///            "&lt;a href=&quot;x&quot;&gt;&#039;&amp;&#039;&lt;/a&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// Renders one rule as a listing item.
///
/// The flags are shown only when the rule names them explicitly.
#[must_use]
pub fn rule_item_html(rule: &SubstitutionRule) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"rule-item\">");
    let _ = write!(
        out,
        "<div class=\"rule-description\">{}</div>",
        escape_html(&rule.description)
    );
    let _ = write!(
        out,
        "<div class=\"rule-pattern\">Pattern: <code>{}</code> \u{2192} <code>{}</code>",
        escape_html(&rule.pattern),
        escape_html(&rule.replacement)
    );
    if let Some(flags) = rule.flags.as_deref().filter(|f| !f.is_empty()) {
        let _ = write!(out, " <em>({})</em>", escape_html(flags));
    }
    out.push_str("</div></div>");
    out
}

/// Renders a rule list.
#[must_use]
pub fn rule_list_html(rules: &[SubstitutionRule]) -> String {
    rules.iter().map(rule_item_html).collect()
}
