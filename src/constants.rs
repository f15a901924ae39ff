pub const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];

pub const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Characters allowed after a reverse solidus, other than `u`.
pub const SIMPLE_ESCAPES: &[char] = &['"', '\\', '/', 'b', 'f', 'n', 'r', 't'];

pub const BEGIN_ARRAY: char = '[';
pub const END_ARRAY: char = ']';
pub const BEGIN_OBJECT: char = '{';
pub const END_OBJECT: char = '}';
pub const NAME_SEPARATOR: char = ':';
pub const VALUE_SEPARATOR: char = ',';
pub const QUOTATION_MARK: char = '"';
pub const REVERSE_SOLIDUS: char = '\\';
pub const DECIMAL_POINT: char = '.';

pub const MAX_DEPTH: usize = 256;

/// Decodes the character following a reverse solidus in a simple escape.
pub fn unescape(code: char) -> Option<char> {
    match code {
        '"' => Some('"'),
        '\\' => Some('\\'),
        '/' => Some('/'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_every_simple_escape_decodes() {
        for &code in SIMPLE_ESCAPES {
            assert!(unescape(code).is_some(), "escape {code:?} should decode");
        }
        assert_eq!(unescape('b'), Some('\u{8}'));
        assert_eq!(unescape('f'), Some('\u{c}'));
        assert_eq!(unescape('u'), None);
        assert_eq!(unescape('x'), None);
    }
}
