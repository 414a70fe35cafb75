use std::time::Duration;

use uuid::Uuid;

use super::device::DeviceFilter;

/// GATT characteristic carrying audio notifications and accepting the
/// one-byte start/stop control writes.
pub const AUDIO_CHAR_UUID: Uuid = Uuid::from_u128(0x12345678_1234_5678_1234_56789abcdef7);

/// Output sample rate of the peripheral's PCM stream, in Hz.
pub const SAMPLE_RATE: u32 = 32_000;

/// Configuration for a capture session.
///
/// The settle delays encode empirically tuned hardware timing; changing them
/// risks resource contention in the radio stack on the next scan/connect.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// PCM sample rate in Hz (default: 32000).
    pub sample_rate: u32,

    /// UUID of the audio data/control characteristic.
    pub audio_characteristic: Uuid,

    /// Advertisement acceptance filter for device discovery.
    pub device_filter: DeviceFilter,

    /// How long to scan before giving up (default: 10 s).
    pub scan_timeout: Duration,

    /// How long to wait for the GATT connection to come up (default: 30 s).
    pub connect_timeout: Duration,

    /// Notifications arriving within this window of stream start are
    /// discarded; stale initial packets settle out (default: 2 s).
    pub notification_guard: Duration,

    /// Wait after stopping a scan so the radio fully releases (default: 1 s).
    pub scan_release_delay: Duration,

    /// Pause after connecting before touching GATT services (default: 250 ms).
    pub post_connect_pause: Duration,
}

impl CaptureConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_rate == 0 {
            return Err("sample rate must be positive".into());
        }
        if self.device_filter.allowed_addresses.is_empty() {
            return Err("device allow-list must not be empty".into());
        }
        if self.device_filter.name_marker.is_empty() {
            return Err("device name marker must not be empty".into());
        }
        if self.scan_timeout.is_zero() {
            return Err("scan timeout must be positive".into());
        }
        Ok(())
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            audio_characteristic: AUDIO_CHAR_UUID,
            device_filter: DeviceFilter::default(),
            scan_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(30),
            notification_guard: Duration::from_secs(2),
            scan_release_delay: Duration::from_secs(1),
            post_connect_pause: Duration::from_millis(250),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(CaptureConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_sample_rate() {
        let config = CaptureConfig {
            sample_rate: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_allow_list() {
        let mut config = CaptureConfig::default();
        config.device_filter.allowed_addresses.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn characteristic_uuid_matches_firmware() {
        assert_eq!(
            AUDIO_CHAR_UUID.to_string(),
            "12345678-1234-5678-1234-56789abcdef7"
        );
    }
}
