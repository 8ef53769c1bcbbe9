//! Text utilities over Unicode scalar values; a multi-byte UTF-8 character is
//! never split. `reverse` and `is_palindrome` work per code point, which keeps
//! `reverse(reverse(s)) == s` for every `s`. `truncate` counts extended
//! grapheme clusters so it never cuts an accent or emoji sequence in half.
//!
//! Every function takes `impl Into<Option<&str>>`: plain `&str` works as usual
//! and an absent input (`None`) propagates instead of failing.
//! `reverse(None)` is `None`, `is_palindrome(None)` is `false` and
//! `count_words(None)` is `0`.

use unicode_segmentation::UnicodeSegmentation;

pub fn reverse<'a>(s: impl Into<Option<&'a str>>) -> Option<String> {
    s.into().map(|s| s.chars().rev().collect())
}

/// 忽略空白與大小寫後判斷是否為回文
pub fn is_palindrome<'a>(s: impl Into<Option<&'a str>>) -> bool {
    let Some(s) = s.into() else {
        return false;
    };

    let cleaned: Vec<char> = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

pub fn count_words<'a>(s: impl Into<Option<&'a str>>) -> usize {
    s.into().map_or(0, |s| s.split_whitespace().count())
}

/// Shorten `s` to at most `max_len` characters, replacing the tail with `"..."`.
/// When `max_len <= 3` there is no room for text and the result is all dots.
pub fn truncate<'a>(s: impl Into<Option<&'a str>>, max_len: usize) -> Option<String> {
    let s = s.into()?;
    if s.graphemes(true).count() <= max_len {
        return Some(s.to_string());
    }
    if max_len <= 3 {
        return Some(".".repeat(max_len));
    }

    let mut out: String = s.graphemes(true).take(max_len - 3).collect();
    out.push_str("...");
    Some(out)
}
