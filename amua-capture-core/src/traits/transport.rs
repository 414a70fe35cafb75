use std::sync::Arc;

use crate::models::error::CaptureError;

/// Callback invoked with the raw bytes of each inbound notification.
///
/// The transport must deliver notifications serially, in arrival order; the
/// session relies on that to keep buffer appends from interleaving.
pub type NotificationCallback = Arc<dyn Fn(&[u8]) + Send + Sync + 'static>;

/// Interface to the GATT notification stream of the audio peripheral.
///
/// Implemented by `BleAudioTransport` in `amua-capture-ble`; tests use
/// in-process fakes.
pub trait StreamTransport: Send {
    /// Subscribe to the audio characteristic, delivering each notification
    /// payload via `callback`.
    fn subscribe(&mut self, callback: NotificationCallback) -> Result<(), CaptureError>;

    /// Stop notifications and drop the callback.
    fn unsubscribe(&mut self) -> Result<(), CaptureError>;

    /// Write a one-byte command (0x01 start / 0x00 stop) to the control
    /// characteristic.
    fn write_control(&mut self, command: u8) -> Result<(), CaptureError>;
}
