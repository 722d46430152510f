//! portkit - Port contracts and outcome types for hexagonal application boundaries
//!
//! This library provides the small contract surface that separates "drive
//! the use case" from "receive the use case's outcome" in a
//! Clean-Architecture style: a family of input- and output-port traits, and
//! the [`Outcome`] value they exchange, which carries success or failure as
//! data instead of aborting control flow.
//!
//! # Architecture
//!
//! The library is organized into two layers, leaves first:
//!
//! - **Shared** (`shared`): The [`Outcome`] and [`Error`] value types — the
//!   semantic core. Immutable, thread-safe values with no dependencies of
//!   their own.
//! - **Ports** (`ports`): Five contract traits split the hexagonal way into
//!   `inbound` (driving: [`InputPort`], [`UnaryInputPort`],
//!   [`BinaryInputPort`]) and `outbound` (driven: [`OutputPort`],
//!   [`UnaryOutputPort`]), depending only on `shared`.
//!
//! The two layers compose only in a caller — a use case implements an input
//! port and hands its outcome to an output port. This crate defines the
//! shapes; it wires nothing, runs nothing, and mandates no executor.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use async_trait::async_trait;
//! use portkit::prelude::*;
//!
//! /// Presenter that stores the outcome for later rendering.
//! #[derive(Default)]
//! struct GreetingPresenter {
//!     last: Mutex<Option<Outcome<String>>>,
//! }
//!
//! impl UnaryOutputPort<String> for GreetingPresenter {
//!     fn handle(&self, outcome: Outcome<String>) {
//!         *self.last.lock().unwrap() = Some(outcome);
//!     }
//! }
//!
//! /// Use case that greets whoever it is given.
//! struct GreetUseCase {
//!     output: Arc<GreetingPresenter>,
//! }
//!
//! #[async_trait]
//! impl UnaryInputPort<String> for GreetUseCase {
//!     async fn execute(&self, name: String) {
//!         let outcome = if name.is_empty() {
//!             Outcome::failure(Error::new("EmptyName", "name must not be empty"))
//!         } else {
//!             Outcome::success(format!("hello, {}", name))
//!         };
//!         self.output.handle(outcome);
//!     }
//! }
//!
//! let presenter = Arc::new(GreetingPresenter::default());
//! let use_case = GreetUseCase {
//!     output: presenter.clone(),
//! };
//!
//! futures::executor::block_on(use_case.execute("world".to_string()));
//!
//! let outcome = presenter.last.lock().unwrap().take().unwrap();
//! assert!(outcome.is_success());
//! assert_eq!(outcome.value(), Some(&"hello, world".to_string()));
//! ```
//!
//! [`Outcome`]: crate::shared::Outcome
//! [`Error`]: crate::shared::Error
//! [`InputPort`]: crate::ports::inbound::InputPort
//! [`UnaryInputPort`]: crate::ports::inbound::UnaryInputPort
//! [`BinaryInputPort`]: crate::ports::inbound::BinaryInputPort
//! [`OutputPort`]: crate::ports::outbound::OutputPort
//! [`UnaryOutputPort`]: crate::ports::outbound::UnaryOutputPort

pub mod ports;
pub mod shared;

pub use shared::{Error, Outcome};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ports::inbound::{BinaryInputPort, InputPort, UnaryInputPort};
    pub use crate::ports::outbound::{OutputPort, UnaryOutputPort};
    pub use crate::shared::{Error, Outcome};
}
