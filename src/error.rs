//! Error types returned by the helpers and the function registry.

/// Errors surfaced to the calling template engine.
#[derive(Debug, thiserror::Error)]
pub enum HelperError {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("function not defined: {0}")]
    UnknownFunction(String),

    #[error("wrong number of args for {name}: want {expected} got {got}")]
    Arity { name: String, expected: usize, got: usize },

    #[error("{name}: argument {position} must be {expected}")]
    InvalidArgument {
        name: String,
        position: usize,
        expected: &'static str,
    },
}

impl HelperError {
    /// Whether the error comes from a pattern that failed to compile
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, HelperError::InvalidPattern { .. })
    }
}
