/// Inbound ports (Driving ports) - Use case entry contracts
///
/// These ports define the call shapes by which external adapters (e.g.
/// controllers, schedulers, message consumers) drive a use case, one trait
/// per entity arity so each dependency declaration is exact.
pub mod binary_input_port;
pub mod input_port;
pub mod unary_input_port;

pub use binary_input_port::BinaryInputPort;
pub use input_port::InputPort;
pub use unary_input_port::UnaryInputPort;
