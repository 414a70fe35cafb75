use thiserror::Error;

/// Errors that can occur during capture operations.
///
/// Decode failures carry a nested [`DecodeError`] so callers can drop a bad
/// packet without tearing down the stream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("device not available")]
    DeviceNotAvailable,

    #[error("configuration failed: {0}")]
    ConfigurationFailed(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("timeout")]
    Timeout,
}

/// A notification payload that could not be parsed.
///
/// Never fatal: the packet is logged and dropped, and the stream keeps
/// running.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("packet too short: {len} bytes, need at least 243")]
    ShortPacket { len: usize },
}
