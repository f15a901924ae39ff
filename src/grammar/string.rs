use std::convert::identity;

use crate::ast::Node;
use crate::combinator::{and, many, match_any_of, match_char, match_predicate, or, try_map};
use crate::combinator::{Cursor, Parser, Reply};
use crate::constants::{unescape, QUOTATION_MARK, REVERSE_SOLIDUS, SIMPLE_ESCAPES};

const HIGH_SURROGATES: std::ops::Range<u32> = 0xD800..0xDC00;
const LOW_SURROGATES: std::ops::Range<u32> = 0xDC00..0xE000;

fn hex_digit<'a>() -> impl Parser<'a, Output = u32> {
    try_map(match_predicate(|ch: char| ch.is_ascii_hexdigit()), |ch: char| {
        ch.to_digit(16)
    })
}

/// Four hex digits read as one UTF-16 code unit.
fn code_unit<'a>() -> impl Parser<'a, Output = u32> {
    and(
        (hex_digit(), hex_digit(), hex_digit(), hex_digit()),
        |(a, b, c, d)| (a << 12) | (b << 8) | (c << 4) | d,
    )
}

/// `u` plus four hex digits; a high surrogate must be followed by `\u` and a
/// low surrogate. Lone surrogates are rejected.
fn unicode_escape(input: Cursor<'_>) -> Reply<'_, char> {
    let high = try_map(code_unit(), |unit| HIGH_SURROGATES.contains(&unit).then_some(unit));
    let low = try_map(code_unit(), |unit| LOW_SURROGATES.contains(&unit).then_some(unit));
    let pair = try_map(
        and(
            (high, match_char(REVERSE_SOLIDUS), match_char('u'), low),
            |(high, _, _, low)| (high, low),
        ),
        |(high, low)| char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)),
    );
    let single = try_map(code_unit(), char::from_u32);
    and((match_char('u'), or((pair, single), identity)), |(_, ch)| ch).attempt(input)
}

fn escape(input: Cursor<'_>) -> Reply<'_, char> {
    let simple = try_map(match_any_of(SIMPLE_ESCAPES), unescape);
    and(
        (
            match_char(REVERSE_SOLIDUS),
            or((simple, unicode_escape), identity),
        ),
        |(_, ch)| ch,
    )
    .attempt(input)
}

/// The decoded contents of a quoted string.
pub fn quoted_text(input: Cursor<'_>) -> Reply<'_, String> {
    let unescaped = match_predicate(|ch| ch != QUOTATION_MARK && ch != REVERSE_SOLIDUS);
    let body = many(or((unescaped, escape), identity), |chars| {
        chars.into_iter().collect::<String>()
    });
    and(
        (match_char(QUOTATION_MARK), body, match_char(QUOTATION_MARK)),
        |(_, text, _)| text,
    )
    .attempt(input)
}

pub fn string(input: Cursor<'_>) -> Reply<'_, Node> {
    let (text, rest) = quoted_text(input);
    (text.map(Node::String), rest)
}
