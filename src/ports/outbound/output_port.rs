use crate::shared::Outcome;

/// OutputPort - boundary contract that yields a value-less outcome.
///
/// This port defines the call shape by which a use case's caller collects
/// an outcome that carries no value: `handle` takes no input and returns
/// the non-generic [`Outcome`] directly, a synchronous handoff.
///
/// Implementations must be `Send + Sync` so async use cases can hold them
/// behind `Arc<dyn OutputPort>` across suspension points. Each call
/// constructs an independent outcome; the contract forbids pooling or
/// sharing outcome instances across calls.
pub trait OutputPort: Send + Sync {
    /// Hands the outcome to the caller.
    fn handle(&self) -> Outcome;
}
