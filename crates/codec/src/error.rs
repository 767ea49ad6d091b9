use thiserror::Error;

/// Error type for codec operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A token inside the container failed numeral parsing. Non-fatal:
    /// the parser records it and resumes at the next delimiter.
    #[error("Malformed token '{0}'")]
    MalformedToken(String),
}
