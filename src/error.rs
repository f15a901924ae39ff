#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Depth,
    Deserialize,
    Io,
    Utf8,
}

/// Error raised by the `Result`-returning API. The grammar itself only
/// matches or fails, so syntax errors carry no position.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl Error {
    pub fn syntax(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
        }
    }

    pub fn depth(depth: usize, limit: usize) -> Self {
        Self {
            kind: ErrorKind::Depth,
            message: format!("nesting depth {depth} exceeds limit {limit}"),
        }
    }

    pub fn deserialize(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Deserialize,
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: message.into(),
        }
    }

    pub fn utf8(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Utf8,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_constructors_set_kind_and_message() {
        let err = Error::depth(300, 256);
        assert_eq!(err.kind, ErrorKind::Depth);
        assert_eq!(err.to_string(), "nesting depth 300 exceeds limit 256");

        assert_eq!(Error::syntax("bad").kind, ErrorKind::Syntax);
        assert_eq!(Error::deserialize("bad").kind, ErrorKind::Deserialize);
        assert_eq!(Error::io("bad").kind, ErrorKind::Io);
        assert_eq!(Error::utf8("bad").to_string(), "bad");
    }
}
