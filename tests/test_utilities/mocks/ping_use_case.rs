use std::sync::Arc;

use async_trait::async_trait;
use portkit::prelude::*;

/// Fixture use case driven through the arity-0 input port.
///
/// Takes no entities and hands a value-less success to its output port.
/// Its `execute` body has no suspension point, which makes it the probe
/// for the already-resolved fast path.
pub struct PingUseCase {
    output: Arc<dyn UnaryOutputPort<()>>,
}

impl PingUseCase {
    pub fn new(output: Arc<dyn UnaryOutputPort<()>>) -> Self {
        Self { output }
    }
}

#[async_trait]
impl InputPort for PingUseCase {
    async fn execute(&self) {
        self.output.handle(Outcome::ok());
    }
}
