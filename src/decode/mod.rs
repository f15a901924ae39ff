use std::io::Read;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::ast::Node;
use crate::combinator::Cursor;
use crate::grammar::{self, depth::nesting_depth};
use crate::value::Value;
use crate::{Error, ParseOptions, Result};

pub fn parse_str(input: &str, options: &ParseOptions) -> Result<Node> {
    check_depth(input, options)?;
    match grammar::json(Cursor::new(input)) {
        (Some(node), _) => {
            debug!(kind = node.kind(), len = input.len(), "parsed document");
            Ok(node)
        }
        (None, _) => {
            debug!(len = input.len(), "rejected document: no match");
            Err(Error::syntax("invalid JSON document"))
        }
    }
}

fn check_depth(input: &str, options: &ParseOptions) -> Result<()> {
    let Some(limit) = options.max_depth else {
        return Ok(());
    };
    let depth = nesting_depth(input);
    if depth > limit {
        debug!(depth, limit, "rejected document: nesting too deep");
        return Err(Error::depth(depth, limit));
    }
    Ok(())
}

pub fn to_value(input: &str, options: &ParseOptions) -> Result<Value> {
    parse_str(input, options).map(Value::from)
}

pub fn from_str<T: DeserializeOwned>(input: &str, options: &ParseOptions) -> Result<T> {
    let value = to_value(input, options)?;
    serde_json::from_value(value.into())
        .map_err(|err| Error::deserialize(format!("deserialize failed: {err}")))
}

pub fn from_slice<T: DeserializeOwned>(input: &[u8], options: &ParseOptions) -> Result<T> {
    let text =
        std::str::from_utf8(input).map_err(|err| Error::utf8(format!("invalid utf-8: {err}")))?;
    from_str(text, options)
}

pub fn from_reader<T: DeserializeOwned, R: Read>(
    mut reader: R,
    options: &ParseOptions,
) -> Result<T> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|err| Error::io(format!("read failed: {err}")))?;
    from_slice(&buf, options)
}

pub fn validate_str(input: &str, options: &ParseOptions) -> Result<()> {
    parse_str(input, options).map(|_| ())
}
