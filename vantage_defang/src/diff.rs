// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Rough count of the edits between `original` and `processed`.
///
/// Compares the two strings character by character, position by position
/// (the shorter one padded), and returns half the number of differing
/// positions, rounded down. This is a display statistic, not an edit distance:
/// one insertion near the start shifts every later character.
///
/// ```
/// use vantage_defang::count_differences;
///
/// assert_eq!(count_differences("a.b", "a.b"), 0);
/// assert_eq!(count_differences("a.b", "a[.]b"), 2);
/// ```
#[must_use]
pub fn count_differences(original: &str, processed: &str) -> usize {
    if original == processed {
        return 0;
    }
    let mut a = original.chars();
    let mut b = processed.chars();
    let mut changes = 0;
    loop {
        match (a.next(), b.next()) {
            (None, None) => break,
            (x, y) if x != y => changes += 1,
            _ => {}
        }
    }
    changes / 2
}

#[cfg(test)]
mod tests {
    use super::count_differences;

    #[test]
    fn padded_comparison() {
        // "ab" vs "abcd": two extra positions.
        assert_eq!(count_differences("ab", "abcd"), 1);
        // Same length, three positions differ.
        assert_eq!(count_differences("abc", "xyz"), 1);
        assert_eq!(count_differences("", "abcd"), 2);
        // One bracketed period shifts the tail: four positions differ.
        assert_eq!(count_differences("a.b", "a[.]b"), 2);
    }
}
