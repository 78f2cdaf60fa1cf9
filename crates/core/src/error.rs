use thiserror::Error;

/// Error produced when parsing an identifier or verse key from its string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse {kind} from {input:?}")]
pub struct ParseKeyError {
    kind: &'static str,
    input: String,
}

impl ParseKeyError {
    pub(crate) fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}
