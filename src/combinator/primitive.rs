use super::{Cursor, Parser, Reply};

/// Value produced by [`match_end_of_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eof;

/// Consumes one character satisfying `predicate`.
pub fn match_predicate<'a, P>(predicate: P) -> impl Parser<'a, Output = char>
where
    P: Fn(char) -> bool,
{
    move |input: Cursor<'a>| match input.split_first() {
        Some((ch, rest)) if predicate(ch) => (Some(ch), rest),
        _ => (None, input),
    }
}

/// Consumes exactly `expected`.
pub fn match_char<'a>(expected: char) -> impl Parser<'a, Output = char> {
    match_predicate(move |ch| ch == expected)
}

/// Consumes one character that is a member of `set`.
pub fn match_any_of<'a>(set: &'static [char]) -> impl Parser<'a, Output = char> {
    match_predicate(move |ch| set.contains(&ch))
}

/// Succeeds without consuming anything, only when no input remains.
pub fn match_end_of_input(input: Cursor<'_>) -> Reply<'_, Eof> {
    if input.is_empty() {
        (Some(Eof), input)
    } else {
        (None, input)
    }
}
