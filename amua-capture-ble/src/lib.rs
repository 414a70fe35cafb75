//! # amua-capture-ble
//!
//! btleplug backend for amua-capture-kit.
//!
//! Provides:
//! - `BleCentral` — owns the tokio runtime and Bluetooth adapter, exposing a
//!   blocking surface to the synchronous capture core
//! - `locator` — scan/allow-list device discovery with bounded wait
//! - `BleAudioTransport` — GATT notification transport implementing the
//!   core's `StreamTransport` trait
//! - `amua-record` — interactive recorder CLI (`src/bin/amua_record.rs`)
//!
//! ## Usage
//! ```ignore
//! use amua_capture_ble::BleCentral;
//! use amua_capture_core::{CaptureConfig, StreamSession};
//!
//! let config = CaptureConfig::default();
//! let central = BleCentral::new()?;
//! let device = central.locate(&config)?.expect("no device in range");
//! let transport = central.connect(device, &config)?;
//! let mut session = StreamSession::new(transport, config);
//! ```

pub mod central;
pub mod locator;
pub mod transport;

pub use central::BleCentral;
pub use locator::DiscoveredDevice;
pub use transport::BleAudioTransport;

use amua_capture_core::CaptureError;

/// Map a btleplug failure onto the core's transport error.
pub(crate) fn transport_err(e: btleplug::Error) -> CaptureError {
    CaptureError::Transport(e.to_string())
}
