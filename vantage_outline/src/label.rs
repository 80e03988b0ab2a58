// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label line breaking for long node names.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Names longer than this many characters are wrapped.
pub const WRAP_THRESHOLD_CHARS: usize = 20;

/// Widest line a wrapped label may occupy.
pub const MAX_LINE_WIDTH: f64 = 150.0;

/// Breaks `name` into lines for display.
///
/// Short names stay on one line. Longer ones are filled greedily word by word,
/// starting a new line whenever `measure` reports that the next word would make
/// the line wider than `max_width`. A single word wider than `max_width` gets
/// a line of its own.
///
/// ```
/// use vantage_outline::label::wrap_label;
///
/// // Measure in characters, 10 per unit.
/// let lines = wrap_label("Fundamentals of distributed systems", 150.0, |s| s.len() as f64 * 10.0);
/// assert_eq!(lines, ["Fundamentals of", "distributed", "systems"]);
/// ```
pub fn wrap_label<F>(name: &str, max_width: f64, mut measure: F) -> Vec<String>
where
    F: FnMut(&str) -> f64,
{
    if name.chars().count() <= WRAP_THRESHOLD_CHARS {
        return alloc::vec![name.to_string()];
    }
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in name.split(' ') {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate_len = line.len();
        line.push(' ');
        line.push_str(word);
        if measure(&line) > max_width {
            line.truncate(candidate_len);
            lines.push(core::mem::replace(&mut line, word.to_string()));
        }
    }
    lines.push(line);
    lines
}
