/// Outbound ports (Driven ports) - Outcome handoff contracts
///
/// These ports define the call shapes by which a use case hands its outcome
/// to boundary consumers (presenters, transport adapters, stores).
pub mod output_port;
pub mod unary_output_port;

pub use output_port::OutputPort;
pub use unary_output_port::UnaryOutputPort;
