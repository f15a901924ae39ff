//! JSON parsing on top of a small parser-combinator engine.
//!
//! [`parse`] turns text into a [`Node`] tree, [`to_value`] turns a tree into
//! native [`Value`]s, and [`from_str`] goes all the way to any
//! `serde::Deserialize` type. The combinator engine lives in [`combinator`]
//! and the grammar rules in [`grammar`]; both are public so other grammars
//! can reuse them.
//!
//! Parsing recurses once per nesting level. The `Result` API rejects
//! documents nested deeper than [`ParseOptions::max_depth`] before parsing;
//! [`parse`] and [`parse_document`] do no such check.

pub mod ast;
pub mod combinator;
pub mod constants;
pub mod decode;
pub mod error;
pub mod grammar;
pub mod options;
pub mod parallel;
pub mod value;

use std::io::Read;

use serde::de::DeserializeOwned;

pub use crate::ast::Node;
pub use crate::combinator::{Cursor, Parser, Reply};
pub use crate::error::{Error, ErrorKind};
pub use crate::options::ParseOptions;
pub use crate::parallel::parse_many;
pub use crate::value::{to_value, Value};

pub type Result<T> = std::result::Result<T, Error>;

/// Parses a complete document, or returns `None` if it does not match.
pub fn parse(input: &str) -> Option<Node> {
    parse_document(input).0
}

/// Runs the top-level rule and returns its raw reply.
pub fn parse_document(input: &str) -> Reply<'_, Node> {
    grammar::json(Cursor::new(input))
}

pub fn parse_str(input: &str) -> Result<Node> {
    parse_str_with_options(input, &ParseOptions::default())
}

pub fn parse_str_with_options(input: &str, options: &ParseOptions) -> Result<Node> {
    decode::parse_str(input, options)
}

pub fn decode_to_value(input: &str) -> Result<Value> {
    decode_to_value_with_options(input, &ParseOptions::default())
}

pub fn decode_to_value_with_options(input: &str, options: &ParseOptions) -> Result<Value> {
    decode::to_value(input, options)
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    from_str_with_options(input, &ParseOptions::default())
}

pub fn from_str_with_options<T: DeserializeOwned>(
    input: &str,
    options: &ParseOptions,
) -> Result<T> {
    decode::from_str(input, options)
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    from_slice_with_options(input, &ParseOptions::default())
}

pub fn from_slice_with_options<T: DeserializeOwned>(
    input: &[u8],
    options: &ParseOptions,
) -> Result<T> {
    decode::from_slice(input, options)
}

pub fn from_reader<T: DeserializeOwned, R: Read>(reader: R) -> Result<T> {
    from_reader_with_options(reader, &ParseOptions::default())
}

pub fn from_reader_with_options<T: DeserializeOwned, R: Read>(
    reader: R,
    options: &ParseOptions,
) -> Result<T> {
    decode::from_reader(reader, options)
}

pub fn validate_str(input: &str) -> Result<()> {
    validate_str_with_options(input, &ParseOptions::default())
}

pub fn validate_str_with_options(input: &str, options: &ParseOptions) -> Result<()> {
    decode::validate_str(input, options)
}
