//! Parser error types.

/// Why an upstream payload could not be turned into records.
///
/// The message is the text shown to API clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The payload did not match any shape we know
    #[error("{0}")]
    Format(String),

    /// The upstream explicitly reported zero matches
    #[error("{0}")]
    NotFound(String),

    /// The upstream served its "try again later" page
    #[error("{0}")]
    Unavailable(String),
}

impl ParseError {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::Format(_) => "format",
            ParseError::NotFound(_) => "not_found",
            ParseError::Unavailable(_) => "unavailable",
        }
    }

    pub(crate) fn format(message: impl Into<String>) -> Self {
        ParseError::Format(message.into())
    }
}
