use async_trait::async_trait;

/// InputPort - arity-0 driving contract for a use case.
///
/// This port defines the call shape by which a caller drives a use case
/// that needs no entities. The operation performs the implementation-defined
/// action and completes; it signals no error of its own. Any failure
/// semantics the implementation wants to expose must travel through a
/// cooperating output port, not through this contract.
///
/// # Async Support
///
/// `execute` returns a handle to an operation that may already be finished —
/// an implementation that completes without suspending is valid and
/// expected, not an anti-pattern. Callers must await the handle either way.
/// The crate mandates no executor; many invocations may run concurrently,
/// and implementations that add shared state own the locking discipline for
/// it. Implementations must be `Send + Sync`.
#[async_trait]
pub trait InputPort: Send + Sync {
    /// Drives the use case.
    ///
    /// Repeated calls are independent invocations; the contract never
    /// collapses them.
    async fn execute(&self);
}
