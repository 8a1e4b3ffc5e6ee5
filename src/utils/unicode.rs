//! Byte-index helpers for editing text that may contain multi-byte chars.

use unicode_width::UnicodeWidthStr;

pub fn prev_char_boundary(s: &str, byte_index: usize) -> usize {
    s[..byte_index.min(s.len())]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub fn next_char_boundary(s: &str, byte_index: usize) -> usize {
    if byte_index >= s.len() {
        return s.len();
    }
    s[byte_index..]
        .chars()
        .next()
        .map(|c| byte_index + c.len_utf8())
        .unwrap_or(s.len())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start of the word before `byte_index`, skipping any separators first.
pub fn prev_word_boundary(s: &str, byte_index: usize) -> usize {
    let chars: Vec<(usize, char)> = s[..byte_index.min(s.len())].char_indices().collect();
    let mut pos = chars.len();

    while pos > 0 && !is_word_char(chars[pos - 1].1) {
        pos -= 1;
    }
    while pos > 0 && is_word_char(chars[pos - 1].1) {
        pos -= 1;
    }

    chars.get(pos).map(|(i, _)| *i).unwrap_or(0)
}

/// Start of the next word after `byte_index`.
pub fn next_word_boundary(s: &str, byte_index: usize) -> usize {
    if byte_index >= s.len() {
        return s.len();
    }

    let mut chars = s[byte_index..].char_indices().peekable();
    while chars.next_if(|(_, c)| is_word_char(*c)).is_some() {}
    while chars.next_if(|(_, c)| !is_word_char(*c)).is_some() {}

    chars
        .peek()
        .map(|(i, _)| byte_index + i)
        .unwrap_or(s.len())
}

/// Prefix of `s` that fits in `max_width` terminal columns, cut before the
/// first char that would overflow. Prefixes are measured as whole strings so
/// variation selectors and control chars count the way the renderer counts them.
pub fn truncate_to_width(s: &str, max_width: usize) -> &str {
    for (i, c) in s.char_indices() {
        if s[..i + c.len_utf8()].width() > max_width {
            return &s[..i];
        }
    }
    s
}
