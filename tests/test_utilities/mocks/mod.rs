/// Fixture implementations of the port contracts for integration tests
mod echo_use_case;
mod pairing_use_case;
mod ping_use_case;
mod recording_output_port;

pub use echo_use_case::EchoUseCase;
pub use pairing_use_case::{PairingResponse, PairingUseCase};
pub use ping_use_case::PingUseCase;
pub use recording_output_port::RecordingOutputPort;
