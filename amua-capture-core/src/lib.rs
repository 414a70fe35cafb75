//! # amua-capture-core
//!
//! Platform-agnostic core for streaming-audio capture from an Amua BLE
//! peripheral.
//!
//! Provides packet decoding, capture/recording buffering, session
//! orchestration, command dispatch, and WAV output. BLE backends implement
//! the `StreamTransport` trait and plug into the generic `StreamSession`.
//!
//! ## Architecture
//!
//! ```text
//! amua-capture-core (this crate)
//! ├── traits/       ← StreamTransport
//! ├── models/       ← CaptureError, CaptureConfig, SessionState, DeviceHandle, DeviceFilter
//! ├── protocol/     ← packet decoder, hexdump audit formatting
//! ├── processing/   ← SampleBuffer, WAV header generation
//! ├── session/      ← StreamSession (generic orchestrator), RecordingController
//! ├── dispatch/     ← Command parsing, operator command loop
//! └── storage/      ← WavWriter, metadata sidecar
//! ```

pub mod dispatch;
pub mod models;
pub mod processing;
pub mod protocol;
pub mod session;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use dispatch::command::Command;
pub use dispatch::input::CommandInput;
pub use models::config::CaptureConfig;
pub use models::device::{DeviceFilter, DeviceHandle};
pub use models::error::{CaptureError, DecodeError};
pub use models::recording_result::{RecordingMetadata, RecordingResult};
pub use models::state::{SessionState, SessionStatus};
pub use processing::sample_buffer::SampleBuffer;
pub use protocol::packet::{decode_packet, DecodedPacket};
pub use session::recording::RecordingController;
pub use session::stream::{StreamDiagnostics, StreamSession};
pub use storage::wav_writer::WavWriter;
pub use traits::transport::{NotificationCallback, StreamTransport};
