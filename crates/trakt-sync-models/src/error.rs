use thiserror::Error;

/// Failure to turn a wire tree back into one of the body records.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input text was not JSON at all
    #[error("body is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// A required key was missing or a value had the wrong type
    #[error("invalid {target} body: {source}")]
    Shape {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// A string that is not one of the wire values of a collection classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value '{value}' (expected one of: {expected})")]
pub struct ParseClassificationError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}
