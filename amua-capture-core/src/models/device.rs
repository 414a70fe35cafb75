use serde::{Deserialize, Serialize};

/// Hardware addresses of the known Amua peripherals.
pub const DEFAULT_ALLOWED_ADDRESSES: [&str; 2] = ["D5:91:CC:7A:AC:E4", "E4:02:D2:DA:A5:29"];

/// Marker substring required in the advertised device name.
pub const DEVICE_NAME_MARKER: &str = "Amua";

/// A peripheral discovered during a scan.
///
/// Produced by the device locator, consumed when opening a stream session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceHandle {
    pub address: String,
    pub name: String,
}

/// Advertisement acceptance filter.
///
/// A candidate is accepted when its advertised name contains `name_marker`
/// AND its hardware address is in `allowed_addresses`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceFilter {
    pub allowed_addresses: Vec<String>,
    pub name_marker: String,
}

impl DeviceFilter {
    pub fn matches(&self, name: Option<&str>, address: &str) -> bool {
        let Some(name) = name else {
            return false;
        };
        name.contains(&self.name_marker)
            && self
                .allowed_addresses
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(address))
    }
}

impl Default for DeviceFilter {
    fn default() -> Self {
        Self {
            allowed_addresses: DEFAULT_ALLOWED_ADDRESSES
                .iter()
                .map(|a| a.to_string())
                .collect(),
            name_marker: DEVICE_NAME_MARKER.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_device() {
        let filter = DeviceFilter::default();
        assert!(filter.matches(Some("Amua-X"), "D5:91:CC:7A:AC:E4"));
    }

    #[test]
    fn address_comparison_is_case_insensitive() {
        let filter = DeviceFilter::default();
        assert!(filter.matches(Some("Amua-X"), "d5:91:cc:7a:ac:e4"));
    }

    #[test]
    fn rejects_unknown_address() {
        let filter = DeviceFilter::default();
        assert!(!filter.matches(Some("Amua-X"), "AA:BB:CC:DD:EE:FF"));
    }

    #[test]
    fn rejects_name_without_marker() {
        let filter = DeviceFilter::default();
        assert!(!filter.matches(Some("Muse-AB"), "D5:91:CC:7A:AC:E4"));
    }

    #[test]
    fn rejects_nameless_advertisement() {
        let filter = DeviceFilter::default();
        assert!(!filter.matches(None, "D5:91:CC:7A:AC:E4"));
    }

    #[test]
    fn marker_matches_as_substring() {
        let filter = DeviceFilter::default();
        assert!(filter.matches(Some("prod-Amua-7"), "E4:02:D2:DA:A5:29"));
    }
}
