pub mod convert;
pub mod number;

use std::{fmt, ops::Index};

use indexmap::IndexMap;

pub use convert::to_value;

pub type Object = IndexMap<String, Value>;

/// Native dynamic value produced from a syntax tree.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(obj) => obj.get(key),
            _ => None,
        }
    }

    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    pub fn take(&mut self) -> Value {
        std::mem::replace(self, Value::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", number::format_number(*n)),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Array(arr) => {
                write!(f, "[")?;
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            Value::Object(obj) => {
                write!(f, "{{")?;
                for (i, (k, v)) in obj.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k:?}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Value::Array(arr) => arr.get(index).unwrap_or_else(|| {
                panic!(
                    "index {index} out of bounds for array of length {}",
                    arr.len()
                )
            }),
            _ => panic!(
                "cannot index into non-array value of type {}",
                self.type_name()
            ),
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Self::Output {
        match self {
            Value::Object(obj) => obj.get(key).unwrap_or_else(|| {
                panic!("key '{key}' not found in object with {} entries", obj.len())
            }),
            _ => panic!(
                "cannot index into non-object value of type {}",
                self.type_name()
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => {
                if let Some(i) = number::as_exact_i64(n) {
                    serde_json::Value::Number(i.into())
                } else {
                    serde_json::Number::from_f64(n)
                        .map(serde_json::Value::Number)
                        .unwrap_or(serde_json::Value::Null)
                }
            }
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(Into::into).collect())
            }
            Value::Object(obj) => {
                let mut new_obj = serde_json::Map::new();
                for (k, v) in obj {
                    new_obj.insert(k, v.into());
                }
                serde_json::Value::Object(new_obj)
            }
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        value.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use indexmap::IndexMap;
    use serde_json::json;

    use super::Value;

    fn sample() -> Value {
        let mut obj = IndexMap::new();
        obj.insert("a".to_string(), Value::Number(1.0));
        obj.insert(
            "b".to_string(),
            Value::Array(vec![Value::Bool(true), Value::String("x".to_string())]),
        );
        Value::Object(obj)
    }

    #[rstest::rstest]
    fn test_value_accessors_and_take() {
        let mut value = sample();
        assert!(value.is_object());
        assert_eq!(value.type_name(), "object");
        assert_eq!(value.get("a").and_then(Value::as_f64), Some(1.0));
        assert_eq!(value["b"][1].as_str(), Some("x"));
        assert_eq!(value["b"].get_index(0).and_then(Value::as_bool), Some(true));
        assert!(value.get_index(0).is_none());

        let taken = value.take();
        assert!(value.is_null());
        assert!(taken.as_object().is_some());
    }

    #[rstest::rstest]
    fn test_value_display() {
        assert_eq!(sample().to_string(), r#"{"a": 1, "b": [true, "x"]}"#);
        assert_eq!(Value::Number(123.456).to_string(), "123.456");
        assert_eq!(Value::Null.to_string(), "null");
    }

    #[rstest::rstest]
    fn test_value_indexing_panics() {
        let value = Value::Null;
        let err = catch_unwind(AssertUnwindSafe(|| {
            let _ = &value["missing"];
        }));
        assert!(err.is_err());

        let empty_array = Value::Array(Vec::new());
        let err = catch_unwind(AssertUnwindSafe(|| {
            let _ = &empty_array[1];
        }));
        assert!(err.is_err());
    }

    #[rstest::rstest]
    fn test_into_serde_json() {
        let converted: serde_json::Value = sample().into();
        assert_eq!(converted, json!({"a": 1, "b": [true, "x"]}));
        assert!(converted["a"].is_i64());

        let fractional: serde_json::Value = Value::Number(0.25).into();
        assert_eq!(fractional, json!(0.25));

        let infinite: serde_json::Value = Value::Number(f64::INFINITY).into();
        assert_eq!(infinite, json!(null));
    }

    #[rstest::rstest]
    fn test_into_serde_json_keeps_key_order() {
        let converted: serde_json::Value = (&sample()).into();
        let keys: Vec<_> = converted.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["a", "b"]);
    }
}
