//! JSON grammar assembled from the combinator engine.
//!
//! Each rule is a plain `fn` so that `value`, `array` and `object` can refer
//! to each other; the combinators inside a rule are built per call.

pub mod depth;
mod string;

use std::convert::identity;

pub use string::{quoted_text, string};

use crate::ast::Node;
use crate::combinator::{
    and, many, match_any_of, match_char, match_end_of_input, or, Cursor, Parser, Reply,
};
use crate::constants::{
    BEGIN_ARRAY, BEGIN_OBJECT, DECIMAL_POINT, DIGITS, END_ARRAY, END_OBJECT, NAME_SEPARATOR,
    VALUE_SEPARATOR, WHITESPACE,
};

/// Skips any run of whitespace. Always succeeds.
pub fn skip_whitespace(input: Cursor<'_>) -> Reply<'_, ()> {
    many(match_any_of(WHITESPACE), |_| ()).attempt(input)
}

/// A structural character with optional whitespace on both sides.
pub fn token<'a>(symbol: char) -> impl Parser<'a, Output = char> {
    and(
        (skip_whitespace, match_char(symbol), skip_whitespace),
        |(_, ch, _)| ch,
    )
}

fn keyword<'a>(word: &'static str, node: Node) -> impl Parser<'a, Output = Node> {
    let letters: Vec<_> = word.chars().map(match_char).collect();
    and(letters, move |_| node.clone())
}

/// `true`, `false` or `null`, matched in full.
pub fn literal(input: Cursor<'_>) -> Reply<'_, Node> {
    or(
        (
            keyword("true", Node::Bool(true)),
            keyword("false", Node::Bool(false)),
            keyword("null", Node::Null),
        ),
        identity,
    )
    .attempt(input)
}

fn digits<'a>() -> impl Parser<'a, Output = String> {
    and(
        (match_any_of(DIGITS), many(match_any_of(DIGITS), identity)),
        |(first, rest)| {
            let mut text = String::with_capacity(rest.len() + 1);
            text.push(first);
            text.extend(rest);
            text
        },
    )
}

/// One or more digits, optionally followed by a point and one or more digits.
pub fn number(input: Cursor<'_>) -> Reply<'_, Node> {
    let fractional = and(
        (digits(), match_char(DECIMAL_POINT), digits()),
        |(integer, point, fraction)| format!("{integer}{point}{fraction}"),
    );
    or((fractional, digits()), Node::Number).attempt(input)
}

pub fn array(input: Cursor<'_>) -> Reply<'_, Node> {
    let empty = and((token(BEGIN_ARRAY), token(END_ARRAY)), |_| {
        Node::Array(Vec::new())
    });
    let next_item = and((token(VALUE_SEPARATOR), value), |(_, item)| item);
    let filled = and(
        (
            token(BEGIN_ARRAY),
            value,
            many(next_item, identity),
            token(END_ARRAY),
        ),
        |(_, first, rest, _)| {
            let mut items = Vec::with_capacity(rest.len() + 1);
            items.push(first);
            items.extend(rest);
            Node::Array(items)
        },
    );
    or((empty, filled), identity).attempt(input)
}

fn member(input: Cursor<'_>) -> Reply<'_, (String, Node)> {
    and(
        (quoted_text, token(NAME_SEPARATOR), value),
        |(key, _, value)| (key, value),
    )
    .attempt(input)
}

pub fn object(input: Cursor<'_>) -> Reply<'_, Node> {
    let empty = and((token(BEGIN_OBJECT), token(END_OBJECT)), |_| {
        Node::Object(Vec::new())
    });
    let next_member = and((token(VALUE_SEPARATOR), member), |(_, pair)| pair);
    let filled = and(
        (
            token(BEGIN_OBJECT),
            member,
            many(next_member, identity),
            token(END_OBJECT),
        ),
        |(_, first, rest, _)| {
            let mut members = Vec::with_capacity(rest.len() + 1);
            members.push(first);
            members.extend(rest);
            Node::Object(members)
        },
    );
    or((empty, filled), identity).attempt(input)
}

/// Any JSON value. Order matters: structures first, then literals, strings
/// and numbers.
pub fn value(input: Cursor<'_>) -> Reply<'_, Node> {
    or((array, object, literal, string, number), identity).attempt(input)
}

/// A complete document: one value, optional surrounding whitespace, nothing
/// else.
pub fn json(input: Cursor<'_>) -> Reply<'_, Node> {
    and(
        (skip_whitespace, value, skip_whitespace, match_end_of_input),
        |(_, node, _, _)| node,
    )
    .attempt(input)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn num(raw: &str) -> Node {
        Node::Number(raw.to_string())
    }

    #[rstest]
    fn test_skip_whitespace_is_idempotent_without_leading_ws() {
        let start = Cursor::new("true ");
        assert_eq!(skip_whitespace(start), (Some(()), start));
    }

    #[rstest]
    fn test_skip_whitespace_consumes_all_four_kinds() {
        let (_, rest) = skip_whitespace(Cursor::new(" \t\r\n x"));
        assert_eq!(rest.rest(), "x");
    }

    #[rstest]
    fn test_token_wraps_whitespace() {
        let (value, rest) = token(':').run("  :\n\"v\"");
        assert_eq!(value, Some(':'));
        assert_eq!(rest.rest(), "\"v\"");
    }

    #[rstest]
    #[case("true", Node::Bool(true))]
    #[case("false", Node::Bool(false))]
    #[case("null", Node::Null)]
    fn test_literal(#[case] input: &str, #[case] expected: Node) {
        let (node, rest) = literal(Cursor::new(input));
        assert_eq!(node, Some(expected));
        assert!(rest.is_empty());
    }

    #[rstest]
    #[case("tru")]
    #[case("nul")]
    #[case("True")]
    #[case("fals")]
    fn test_partial_keywords_never_match(#[case] input: &str) {
        let start = Cursor::new(input);
        assert_eq!(literal(start), (None, start));
    }

    #[rstest]
    #[case("0", "0", "")]
    #[case("123", "123", "")]
    #[case("123.456", "123.456", "")]
    #[case("007", "007", "")]
    #[case("1.", "1", ".")]
    #[case("1.x", "1", ".x")]
    #[case("12,", "12", ",")]
    fn test_number(#[case] input: &str, #[case] raw: &str, #[case] rest: &str) {
        let (node, remaining) = number(Cursor::new(input));
        assert_eq!(node, Some(num(raw)));
        assert_eq!(remaining.rest(), rest);
    }

    #[rstest]
    #[case(".5")]
    #[case("-1")]
    #[case("")]
    #[case("e5")]
    fn test_number_rejects(#[case] input: &str) {
        let start = Cursor::new(input);
        assert_eq!(number(start), (None, start));
    }

    #[rstest]
    fn test_array_forms() {
        assert_eq!(array(Cursor::new("[ ]")).0, Some(Node::Array(Vec::new())));
        assert_eq!(
            array(Cursor::new("[ 1 , [2] ]")).0,
            Some(Node::Array(vec![num("1"), Node::Array(vec![num("2")])]))
        );
    }

    #[rstest]
    #[case("[1,]")]
    #[case("[,1]")]
    #[case("[1 2]")]
    #[case("[1")]
    #[case("[")]
    fn test_array_rejects(#[case] input: &str) {
        let start = Cursor::new(input);
        assert_eq!(array(start), (None, start));
    }

    #[rstest]
    fn test_object_forms() {
        assert_eq!(
            object(Cursor::new("{ }")).0,
            Some(Node::Object(Vec::new()))
        );
        assert_eq!(
            object(Cursor::new(r#"{ "a" : 1 , "a" : null }"#)).0,
            Some(Node::Object(vec![
                ("a".to_string(), num("1")),
                ("a".to_string(), Node::Null),
            ]))
        );
    }

    #[rstest]
    #[case(r#"{a:1}"#)]
    #[case(r#"{"a":1,}"#)]
    #[case(r#"{"a" 1}"#)]
    #[case(r#"{"a":}"#)]
    #[case(r#"{1:2}"#)]
    fn test_object_rejects(#[case] input: &str) {
        let start = Cursor::new(input);
        assert_eq!(object(start), (None, start));
    }

    #[rstest]
    fn test_json_requires_end_of_input() {
        let (node, rest) = json(Cursor::new(" true "));
        assert_eq!(node, Some(Node::Bool(true)));
        assert!(rest.is_empty());

        let start = Cursor::new("true false");
        assert_eq!(json(start), (None, start));
    }

    #[rstest]
    fn test_json_is_deterministic() {
        let input = r#"{"k":[1.5,"x",{"y":false}]}"#;
        assert_eq!(json(Cursor::new(input)).0, json(Cursor::new(input)).0);
    }
}
