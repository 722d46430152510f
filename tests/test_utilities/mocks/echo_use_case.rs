use std::sync::Arc;

use async_trait::async_trait;
use portkit::prelude::*;

/// Fixture use case driven through the arity-1 input port.
///
/// Echoes whatever entity it receives — including a present-but-empty
/// `None` — back out as a successful outcome.
pub struct EchoUseCase {
    output: Arc<dyn UnaryOutputPort<Option<String>>>,
}

impl EchoUseCase {
    pub fn new(output: Arc<dyn UnaryOutputPort<Option<String>>>) -> Self {
        Self { output }
    }
}

#[async_trait]
impl UnaryInputPort<Option<String>> for EchoUseCase {
    async fn execute(&self, entity: Option<String>) {
        self.output.handle(Outcome::success(entity));
    }
}
