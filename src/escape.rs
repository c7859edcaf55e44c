//! Project: Escpath
//! Module: escape
//!
//! The escaping codec and the escape-aware tokenizer that splits a raw path
//! string into unescaped segments.

/// The character that protects the character following it.
pub const ESCAPE: char = '\\';

/// The separator used when a caller does not provide one.
pub const MAIN_SEPARATOR: char = std::path::MAIN_SEPARATOR;

/// Escapes every escape character and every `separator` found in `name` so
/// the result can be joined with other segments without ambiguity.
pub fn escape_name(name: &str, separator: char) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if c == ESCAPE || c == separator {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Reverses [escape_name]: `\\` becomes `\` and `\` followed by `separator`
/// becomes `separator`. Any other escape character is kept as-is.
pub fn unescape_name(name: &str, separator: char) -> String {
    let mut unescaped = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ESCAPE {
            if let Some(&next) = chars.peek() {
                if next == ESCAPE || next == separator {
                    unescaped.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        unescaped.push(c);
    }
    unescaped
}

/// Splits `path` on every unescaped `separator` and unescapes each piece.
///
/// The result always holds one more segment than there are unescaped
/// separators, so an empty string yields a single empty segment. A dangling
/// escape character at the end of `path` stays in the last segment.
pub fn split_path(path: &str, separator: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut escaping = false;
    let mut last_sep = 0;
    for (i, c) in path.char_indices() {
        if escaping == true {
            escaping = false;
        } else if c == ESCAPE {
            escaping = true;
        } else if c == separator {
            parts.push(unescape_name(&path[last_sep..i], separator));
            last_sep = i + c.len_utf8();
        }
    }
    parts.push(unescape_name(&path[last_sep..], separator));
    parts
}
