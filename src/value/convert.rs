use tracing::warn;

use super::number::parse_number_text;
use super::{Object, Value};
use crate::ast::Node;

/// Converts a syntax tree into native values.
///
/// Repeated object keys resolve last-write-wins: the later value replaces
/// the earlier one, and the key stays where it first appeared.
pub fn to_value(node: &Node) -> Value {
    match node {
        Node::Null => Value::Null,
        Node::Bool(b) => Value::Bool(*b),
        Node::Number(raw) => number_value(raw),
        Node::String(s) => Value::String(s.clone()),
        Node::Array(items) => Value::Array(items.iter().map(to_value).collect()),
        Node::Object(members) => {
            let mut obj = Object::with_capacity(members.len());
            for (key, value) in members {
                obj.insert(key.clone(), to_value(value));
            }
            Value::Object(obj)
        }
    }
}

fn number_value(raw: &str) -> Value {
    match parse_number_text(raw) {
        Some(n) => Value::Number(n),
        None => {
            // only reachable for nodes built by hand
            warn!(raw, "number text does not parse; converting to null");
            Value::Null
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(b),
            Node::Number(raw) => number_value(&raw),
            Node::String(s) => Value::String(s),
            Node::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Node::Object(members) => {
                let mut obj = Object::with_capacity(members.len());
                for (key, value) in members {
                    obj.insert(key, Value::from(value));
                }
                Value::Object(obj)
            }
        }
    }
}

impl From<&Node> for Value {
    fn from(node: &Node) -> Self {
        to_value(node)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn member(key: &str, node: Node) -> (String, Node) {
        (key.to_string(), node)
    }

    #[rstest]
    #[case("123.456", 123.456)]
    #[case("123", 123.0)]
    #[case("0.5", 0.5)]
    fn test_number_conversion(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(
            to_value(&Node::Number(raw.to_string())),
            Value::Number(expected)
        );
    }

    #[rstest]
    fn test_scalars() {
        assert_eq!(to_value(&Node::Null), Value::Null);
        assert_eq!(to_value(&Node::Bool(false)), Value::Bool(false));
        assert_eq!(
            to_value(&Node::String("s".to_string())),
            Value::String("s".to_string())
        );
    }

    #[rstest]
    fn test_duplicate_keys_last_write_wins_first_position() {
        let node = Node::Object(vec![
            member("a", Node::Number("1".to_string())),
            member("b", Node::Number("2".to_string())),
            member("a", Node::Number("3".to_string())),
        ]);
        let value = to_value(&node);
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["a"], Value::Number(3.0));
        let keys: Vec<_> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[rstest]
    fn test_owned_and_borrowed_conversions_agree() {
        let node = Node::Array(vec![
            Node::Object(vec![member("k", Node::Array(Vec::new()))]),
            Node::Number("7".to_string()),
        ]);
        assert_eq!(Value::from(&node), Value::from(node.clone()));
    }

    #[rstest]
    fn test_unparseable_number_text_becomes_null() {
        assert_eq!(to_value(&Node::Number("1.2.3".to_string())), Value::Null);
    }
}
