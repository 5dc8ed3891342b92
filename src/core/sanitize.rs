// src/core/sanitize.rs

use html_escape::decode_html_entities;

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Decode HTML entities, then collapse whitespace runs.
/// Product names come straight out of attribute values and need both.
pub fn clean_text(s: &str) -> String {
    normalize_ws(&decode_html_entities(s))
}
