//! Bracket nesting pre-scan.
//!
//! The grammar recurses once per nesting level and sets no limit of its own,
//! so callers measure the document here before handing it to the parser.

use memchr::memchr2;

/// Maximum array/object nesting of `input`, ignoring brackets inside
/// strings. Works on malformed input too; unbalanced closers never push the
/// count below zero.
pub fn nesting_depth(input: &str) -> usize {
    let bytes = input.as_bytes();
    let mut depth = 0usize;
    let mut max_depth = 0usize;
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'[' | b'{' => {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            b'"' => {
                idx = skip_string(bytes, idx + 1);
                continue;
            }
            _ => {}
        }
        idx += 1;
    }
    max_depth
}

/// Returns the index just past the closing quote, or the end of input.
fn skip_string(bytes: &[u8], mut idx: usize) -> usize {
    while idx < bytes.len() {
        let Some(offset) = memchr2(b'"', b'\\', &bytes[idx..]) else {
            return bytes.len();
        };
        let pos = idx + offset;
        if bytes[pos] == b'"' {
            return pos + 1;
        }
        idx = (pos + 2).min(bytes.len());
    }
    bytes.len()
}
