//! Parsing many independent documents at once.
//!
//! Parses share no state, so with the `parallel` feature each document runs
//! on the rayon pool; without it the same call parses sequentially.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::value::Value;
use crate::{decode, ParseOptions, Result};

#[cfg(feature = "parallel")]
pub fn parse_many<S>(inputs: &[S], options: &ParseOptions) -> Vec<Result<Value>>
where
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|input| decode::to_value(input.as_ref(), options))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub fn parse_many<S>(inputs: &[S], options: &ParseOptions) -> Vec<Result<Value>>
where
    S: AsRef<str>,
{
    inputs
        .iter()
        .map(|input| decode::to_value(input.as_ref(), options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_many;
    use crate::value::Value;
    use crate::{ErrorKind, ParseOptions};

    #[rstest::rstest]
    fn test_parse_many_keeps_input_order() {
        let inputs = ["1", "[", r#"{"a":true}"#, " null "];
        let results = parse_many(&inputs, &ParseOptions::default());
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().ok(), Some(&Value::Number(1.0)));
        assert_eq!(results[1].as_ref().unwrap_err().kind, ErrorKind::Syntax);
        assert_eq!(
            results[2].as_ref().ok().and_then(|v| v.get("a")),
            Some(&Value::Bool(true))
        );
        assert_eq!(results[3].as_ref().ok(), Some(&Value::Null));
    }

    #[rstest::rstest]
    fn test_parse_many_owned_strings() {
        let inputs: Vec<String> = (0..64).map(|i| format!("[{i}, {i}.5]")).collect();
        let results = parse_many(&inputs, &ParseOptions::default());
        for (i, result) in results.into_iter().enumerate() {
            let value = result.unwrap();
            assert_eq!(value[1].as_f64(), Some(i as f64 + 0.5));
        }
    }
}
