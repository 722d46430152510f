/// Ports module defining the contract surface for hexagonal architecture
///
/// This module contains both inbound ports (driving ports - the call shapes
/// that drive a use case) and outbound ports (driven ports - the call shapes
/// through which a use case hands off its outcome).
pub mod inbound;
pub mod outbound;
