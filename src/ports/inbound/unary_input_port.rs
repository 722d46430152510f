use async_trait::async_trait;

/// UnaryInputPort - arity-1 driving contract for a use case.
///
/// Accepts exactly one entity of type `T`, by value. A distinct trait
/// rather than an overload of [`InputPort`](super::InputPort), so a use
/// case's dependency declaration states exactly how many entities it
/// accepts. The port performs no validation: any value is accepted,
/// including the type's "empty" representation (e.g. a `None` for an
/// optional `T`).
///
/// The entity crosses the operation's suspension point, hence the
/// `Send + 'static` bound. Everything else matches
/// [`InputPort`](super::InputPort): no output value, no error of its own,
/// an already-finished handle is valid, implementations are `Send + Sync`.
#[async_trait]
pub trait UnaryInputPort<T: Send + 'static>: Send + Sync {
    /// Drives the use case with one entity.
    async fn execute(&self, entity: T);
}
