use serde::{Deserialize, Serialize};

/// A structured failure descriptor carried by a failed [`Outcome`].
///
/// An `Error` pairs a machine-readable `code` with a human-readable
/// `message`. The crate defines no code vocabulary of its own; callers
/// establish their own set of identifiers (e.g. `"NotFound"`,
/// `"VALIDATION_FAILED"`). Both fields are required and expected to be
/// non-empty by convention; construction does not validate them, so an
/// error built from empty strings is still a well-formed value.
///
/// Equality is by value over `(code, message)`, which is what makes
/// outcome round-trip assertions possible: an error handed to
/// [`Outcome::failure`] compares equal to the error read back out.
///
/// [`Outcome`]: crate::shared::Outcome
/// [`Outcome::failure`]: crate::shared::Outcome::failure
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[error("[{code}] {message}")]
pub struct Error {
    code: String,
    message: String,
}

impl Error {
    /// Creates a new error from a code and a message.
    ///
    /// # Arguments
    /// * `code` - Machine-readable identifier for the failure kind
    /// * `message` - Human-readable description of the failure
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Returns the machine-readable code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
