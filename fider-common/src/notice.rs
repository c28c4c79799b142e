//! Error notices shown to the user

use std::fmt;

/// Fixed heading shown above every error message
pub const ERROR_HEADER: &str = "Oops, an error occurred...";

/// An already-constructed error, reduced to the message that gets displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorNotice {
    message: String,
}

impl ErrorNotice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Capture an error's `Display` output. Sources are not walked.
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self::new(error.to_string())
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
