//! Shared utility functions

use std::borrow::Cow;
use unicode_width::UnicodeWidthChar;

/// Shorten `s` to at most `max_cols` terminal columns, ending in "…" when cut.
///
/// Width is measured in display columns, so wide (CJK, emoji) characters
/// count double and a character is never split.
pub fn truncate_to_width(s: &str, max_cols: usize) -> Cow<'_, str> {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_cols {
        return Cow::Borrowed(s);
    }
    if max_cols == 0 {
        return Cow::Borrowed("");
    }

    // Reserve one column for the ellipsis
    let budget = max_cols - 1;
    let mut used = 0;
    let mut end = 0;
    for (idx, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        end = idx + c.len_utf8();
    }
    Cow::Owned(format!("{}…", &s[..end]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_are_borrowed() {
        assert!(matches!(truncate_to_width("hello", 10), Cow::Borrowed("hello")));
        assert_eq!(truncate_to_width("", 5), "");
    }

    #[test]
    fn cut_strings_end_in_ellipsis() {
        assert_eq!(truncate_to_width("Rollout principles", 8), "Rollout…");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn wide_characters_count_double() {
        // Each character is two columns wide
        assert_eq!(truncate_to_width("日本語", 5), "日本…");
        assert_eq!(truncate_to_width("日本語", 4), "日…");
        assert_eq!(truncate_to_width("日本語", 6), "日本語");
    }
}
