use btleplug::api::Manager as _;
use btleplug::platform::{Adapter, Manager};
use tokio::runtime::Runtime;

use amua_capture_core::{CaptureConfig, CaptureError};

use crate::locator::{self, DiscoveredDevice};
use crate::transport::{self, BleAudioTransport};
use crate::transport_err;

/// Entry point to the BLE stack.
///
/// Owns the tokio runtime that all GATT futures run on, so the capture core
/// can stay synchronous. Must outlive any transport it hands out.
pub struct BleCentral {
    runtime: Runtime,
    adapter: Adapter,
}

impl BleCentral {
    /// Start the runtime and grab the first Bluetooth adapter.
    pub fn new() -> Result<Self, CaptureError> {
        let runtime = Runtime::new()
            .map_err(|e| CaptureError::Transport(format!("failed to start BLE runtime: {}", e)))?;

        let adapter = runtime.block_on(async {
            let manager = Manager::new().await.map_err(transport_err)?;
            let adapters = manager.adapters().await.map_err(transport_err)?;
            adapters
                .into_iter()
                .next()
                .ok_or(CaptureError::DeviceNotAvailable)
        })?;

        Ok(Self { runtime, adapter })
    }

    /// Scan for a peripheral accepted by the config's device filter.
    ///
    /// `Ok(None)` when nothing matched within the scan timeout.
    pub fn locate(&self, config: &CaptureConfig) -> Result<Option<DiscoveredDevice>, CaptureError> {
        self.runtime
            .block_on(locator::locate(&self.adapter, config))
    }

    /// Connect to a discovered device and set up the audio transport.
    pub fn connect(
        &self,
        device: DiscoveredDevice,
        config: &CaptureConfig,
    ) -> Result<BleAudioTransport, CaptureError> {
        self.runtime.block_on(transport::connect(
            self.runtime.handle().clone(),
            device,
            config,
        ))
    }
}
