use std::sync::Arc;

use async_trait::async_trait;
use portkit::prelude::*;

/// Response entity produced by [`PairingUseCase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairingResponse {
    pub tag: String,
}

impl PairingResponse {
    pub fn of(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

/// Fixture use case driven through the arity-2 input port.
///
/// Pairs a tag with a quantity: a negative quantity fails, anything else
/// succeeds with a response carrying the tag. The outcome goes to the
/// injected output port either way.
pub struct PairingUseCase {
    output: Arc<dyn UnaryOutputPort<PairingResponse>>,
}

impl PairingUseCase {
    pub fn new(output: Arc<dyn UnaryOutputPort<PairingResponse>>) -> Self {
        Self { output }
    }
}

#[async_trait]
impl BinaryInputPort<String, i64> for PairingUseCase {
    async fn execute(&self, first: String, second: i64) {
        let outcome = if second < 0 {
            Outcome::failure(Error::new(
                "NegativeQuantity",
                "quantity must not be negative",
            ))
        } else {
            Outcome::success(PairingResponse::of(first))
        };
        self.output.handle(outcome);
    }
}
