use crate::shared::Outcome;

/// UnaryOutputPort - terminal handoff for a use case's outcome.
///
/// This port defines the call shape by which a use case hands its
/// [`Outcome`] to a boundary consumer (a presenter, a transport adapter, a
/// store). The handoff is terminal: `handle` returns nothing, and the
/// implementation cannot report its own failure back through this call.
/// Whether the outcome is stored, forwarded, or rendered is
/// implementation-defined.
///
/// The outcome is passed by value. Ownership moves into the port, which is
/// the contract's delivery guarantee: nothing can observe or mutate the
/// outcome in transit, so the handler receives it exactly as constructed.
pub trait UnaryOutputPort<T>: Send + Sync {
    /// Receives the use case's outcome.
    fn handle(&self, outcome: Outcome<T>);
}
