use crate::constants::MAX_DEPTH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest array/object nesting accepted; `None` skips the check.
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(MAX_DEPTH),
        }
    }
}
