//! Outcome type carried across port boundaries.
//!
//! An [`Outcome`] is the value a use case hands to its output port: either
//! success, optionally carrying a value, or failure, carrying structured
//! errors. Failures are data — nothing here panics, throws, or aborts
//! control flow.

use serde::{Deserialize, Serialize};

use super::Error;

/// The result of a use-case operation: success with an optional value, or
/// failure with one or more [`Error`]s.
///
/// The non-generic form of the original success/failure duality is the
/// default type parameter: an `Outcome` (i.e. `Outcome<()>`) carries no
/// value, an `Outcome<T>` carries a `T` when successful. Success and failure
/// are decided by the variant, so a success can never also carry errors and
/// the invariant cannot drift out of sync with a stored flag.
///
/// Outcomes are immutable values: constructed once through the factory
/// operations below, inspected through read accessors, and consumed. They
/// hold no shared state and are safe to read from any thread.
///
/// `T` may itself be an `Option`: a successful `None` value is a present
/// "empty" value, distinct from the absent value of a failure.
///
/// # Examples
///
/// ```
/// use portkit::{Error, Outcome};
///
/// let ok: Outcome<&str> = Outcome::success("data");
/// assert!(ok.is_success());
/// assert_eq!(ok.value(), Some(&"data"));
/// assert!(ok.errors().is_empty());
///
/// let failed: Outcome<&str> = Outcome::failure(Error::new("NotFound", "missing"));
/// assert!(failed.is_failure());
/// assert_eq!(failed.value(), None);
/// assert_eq!(failed.errors()[0].code(), "NotFound");
/// ```
#[must_use = "an outcome may carry failure information that should be inspected"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<T = ()> {
    /// The operation succeeded, producing `T`.
    Success(T),
    /// The operation failed with the given errors, in the order they were
    /// supplied.
    Failure(Vec<Error>),
}

impl Outcome {
    /// Creates a successful outcome that carries no value.
    ///
    /// This is the nullary `Success()` factory for the non-generic form.
    /// Never fails.
    pub fn ok() -> Outcome {
        Outcome::Success(())
    }
}

impl<T> Outcome<T> {
    /// Creates a successful outcome carrying `value`.
    ///
    /// Any value is accepted, including the type's empty representation
    /// (e.g. `Outcome::success(None)` for an optional `T`). Never fails.
    pub fn success(value: T) -> Outcome<T> {
        Outcome::Success(value)
    }

    /// Creates a failed outcome carrying exactly one error.
    ///
    /// Construction is total: an error with empty fields is accepted as-is,
    /// since field validation is the caller's responsibility. Never fails.
    pub fn failure(error: Error) -> Outcome<T> {
        Outcome::Failure(vec![error])
    }

    /// Creates a failed outcome carrying the given errors, order preserved.
    ///
    /// Callers are expected to supply at least one error. An empty sequence
    /// is not rejected — construction stays total — but produces a
    /// degenerate failure with zero errors, which still reports
    /// [`is_failure`](Self::is_failure).
    pub fn failure_all(errors: impl IntoIterator<Item = Error>) -> Outcome<T> {
        Outcome::Failure(errors.into_iter().collect())
    }

    /// Returns `true` if this outcome represents success.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this outcome represents failure.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the carried value, or `None` if this outcome is a failure.
    ///
    /// Reading the value of a failure is well-defined and never a fault: it
    /// yields the absent marker, `None`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns the errors, in order. Empty when the outcome is successful.
    pub fn errors(&self) -> &[Error] {
        match self {
            Outcome::Success(_) => &[],
            Outcome::Failure(errors) => errors,
        }
    }

    /// Consumes the outcome, returning the carried value if successful.
    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Consumes the outcome, bridging to a standard [`Result`].
    ///
    /// This lets callers apply `?` at their own boundary; the crate itself
    /// never unwraps implicitly.
    pub fn into_result(self) -> Result<T, Vec<Error>> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(errors) => Err(errors),
        }
    }

    /// Maps a successful value through `f`, passing failures through with
    /// their errors untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(errors) => Outcome::Failure(errors),
        }
    }
}

impl<T> From<Error> for Outcome<T> {
    /// A lone error converts into a single-error failure.
    fn from(error: Error) -> Self {
        Outcome::failure(error)
    }
}
