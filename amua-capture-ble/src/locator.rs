use std::time::Duration;

use btleplug::api::{Central, Peripheral as _, ScanFilter};
use btleplug::platform::{Adapter, Peripheral};
use log::info;

use amua_capture_core::{CaptureConfig, CaptureError, DeviceFilter, DeviceHandle};

use crate::transport_err;

/// A peripheral that passed the device filter during a scan.
///
/// Pass to [`crate::BleCentral::connect`] to open the audio transport.
pub struct DiscoveredDevice {
    pub handle: DeviceHandle,
    pub(crate) peripheral: Peripheral,
}

/// Scan until the filter accepts an advertising peripheral or the scan
/// timeout elapses.
///
/// The scan is stopped unconditionally — on match, timeout, and error — and
/// the radio is given `scan_release_delay` to fully release before control
/// returns; skipping that wait starves the next scan/connect of the radio
/// resource.
pub(crate) async fn locate(
    adapter: &Adapter,
    config: &CaptureConfig,
) -> Result<Option<DiscoveredDevice>, CaptureError> {
    info!("Scanning for devices...");
    adapter
        .start_scan(ScanFilter::default())
        .await
        .map_err(transport_err)?;

    let found = tokio::time::timeout(
        config.scan_timeout,
        find_match(adapter, &config.device_filter),
    )
    .await;

    adapter.stop_scan().await.ok();
    tokio::time::sleep(config.scan_release_delay).await;

    match found {
        Ok(device) => {
            info!(
                "Found device: {} at {}",
                device.handle.name, device.handle.address
            );
            Ok(Some(device))
        }
        Err(_) => {
            info!("Scan timeout - device not found");
            Ok(None)
        }
    }
}

/// Poll discovered peripherals until one passes the filter.
async fn find_match(adapter: &Adapter, filter: &DeviceFilter) -> DiscoveredDevice {
    loop {
        for peripheral in adapter.peripherals().await.unwrap_or_default() {
            if let Ok(Some(props)) = peripheral.properties().await {
                let address = props.address.to_string();
                if filter.matches(props.local_name.as_deref(), &address) {
                    let name = props.local_name.unwrap_or_default();
                    return DiscoveredDevice {
                        handle: DeviceHandle { address, name },
                        peripheral,
                    };
                }
            }
        }
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
}
