use btleplug::api::{Characteristic, Peripheral as _, WriteType};
use btleplug::platform::Peripheral;
use futures::StreamExt;
use log::{info, warn};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use amua_capture_core::{CaptureConfig, CaptureError, NotificationCallback, StreamTransport};

use crate::locator::DiscoveredDevice;
use crate::transport_err;

/// GATT notification transport for the Amua audio characteristic.
///
/// Notifications are pumped by one spawned task that filters on the audio
/// characteristic UUID and invokes the session callback; the stream yields
/// packets one at a time, so delivery is serial as the core requires.
pub struct BleAudioTransport {
    handle: Handle,
    peripheral: Peripheral,
    audio_char: Characteristic,
    pump: Option<JoinHandle<()>>,
}

/// Connect to a discovered peripheral and resolve the audio characteristic.
///
/// The pauses around service discovery give the peripheral's GATT stack
/// time to settle; connecting and immediately touching services is flaky on
/// this hardware.
pub(crate) async fn connect(
    handle: Handle,
    device: DiscoveredDevice,
    config: &CaptureConfig,
) -> Result<BleAudioTransport, CaptureError> {
    let peripheral = device.peripheral;

    info!("Attempting connection...");
    tokio::time::timeout(config.connect_timeout, peripheral.connect())
        .await
        .map_err(|_| CaptureError::Timeout)?
        .map_err(transport_err)?;
    info!("Connected successfully!");

    tokio::time::sleep(config.post_connect_pause).await;

    peripheral.discover_services().await.map_err(transport_err)?;
    for service in peripheral.services() {
        info!("Service: {}", service.uuid);
        for characteristic in &service.characteristics {
            info!(
                "  Characteristic: {}, Properties: {:?}",
                characteristic.uuid, characteristic.properties
            );
        }
    }

    tokio::time::sleep(config.post_connect_pause).await;

    let audio_char = peripheral
        .characteristics()
        .into_iter()
        .find(|c| c.uuid == config.audio_characteristic)
        .ok_or_else(|| {
            CaptureError::ConfigurationFailed(format!(
                "audio characteristic {} not found",
                config.audio_characteristic
            ))
        })?;

    Ok(BleAudioTransport {
        handle,
        peripheral,
        audio_char,
        pump: None,
    })
}

impl BleAudioTransport {
    /// Gracefully drop the GATT connection.
    pub fn disconnect(&self) -> Result<(), CaptureError> {
        self.handle
            .block_on(self.peripheral.disconnect())
            .map_err(transport_err)
    }
}

impl StreamTransport for BleAudioTransport {
    fn subscribe(&mut self, callback: NotificationCallback) -> Result<(), CaptureError> {
        if self.pump.is_some() {
            return Err(CaptureError::ConfigurationFailed(
                "already subscribed".into(),
            ));
        }

        self.handle
            .block_on(self.peripheral.subscribe(&self.audio_char))
            .map_err(transport_err)?;

        let peripheral = self.peripheral.clone();
        let uuid = self.audio_char.uuid;
        let pump = self.handle.spawn(async move {
            let mut notifications = match peripheral.notifications().await {
                Ok(n) => n,
                Err(e) => {
                    warn!("Could not open notification stream: {}", e);
                    return;
                }
            };
            while let Some(notification) = notifications.next().await {
                if notification.uuid == uuid {
                    callback(&notification.value);
                }
            }
            info!("Notification stream ended");
        });
        self.pump = Some(pump);
        Ok(())
    }

    fn unsubscribe(&mut self) -> Result<(), CaptureError> {
        if let Some(pump) = self.pump.take() {
            pump.abort();
        }
        self.handle
            .block_on(self.peripheral.unsubscribe(&self.audio_char))
            .map_err(transport_err)
    }

    fn write_control(&mut self, command: u8) -> Result<(), CaptureError> {
        self.handle
            .block_on(
                self.peripheral
                    .write(&self.audio_char, &[command], WriteType::WithoutResponse),
            )
            .map_err(transport_err)
    }
}

impl Drop for BleAudioTransport {
    fn drop(&mut self) {
        if let Some(pump) = self.pump.take() {
            pump.abort();
        }
    }
}
