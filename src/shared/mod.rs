//! Shared kernel: the outcome and error value types the ports exchange.

pub mod error;
pub mod outcome;

pub use error::Error;
pub use outcome::Outcome;
