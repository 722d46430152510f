use async_trait::async_trait;

/// BinaryInputPort - arity-2 driving contract for a use case.
///
/// Accepts exactly two entities, by value, both unvalidated. The third and
/// last member of the input-port arity family; a use case needing more than
/// two entities should group them into a single request type instead.
#[async_trait]
pub trait BinaryInputPort<T: Send + 'static, U: Send + 'static>: Send + Sync {
    /// Drives the use case with two entities.
    async fn execute(&self, first: T, second: U);
}
