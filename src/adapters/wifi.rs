//! WiFi scan adapter.
//!
//! Implements [`ScanPort`] — the hexagonal boundary for the radio.  The
//! driver is brought up once in station mode with no association and held
//! for the lifetime of the firmware; each scan is a blocking call whose
//! duration is bounded by the per-channel dwell time derived from the
//! caller's budget.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: real ESP-IDF scans via
//!   `esp_idf_svc::wifi::WifiDriver`.
//! - **all other targets**: a deterministic simulated neighbourhood for
//!   host-side tests, including a periodic injected failure so the error
//!   report path gets exercised.

use log::info;

use crate::app::ports::{ScanError, ScanPort};
use crate::survey::observation::{NetworkObservation, ScanSession, SecurityMode};

#[cfg(target_os = "espidf")]
use esp_idf_svc::{
    eventloop::EspSystemEventLoop,
    hal::modem::Modem,
    wifi::{
        config::{ScanConfig as DriverScanConfig, ScanType},
        AccessPointInfo, AuthMethod, ClientConfiguration, Configuration, WifiDriver,
    },
};

/// 2.4 GHz channels swept by a full active scan.
const SCAN_CHANNEL_COUNT: u32 = 14;

/// Shortest useful per-channel dwell; a budget that cannot fund one full
/// sweep at this dwell is rejected as a timeout before touching the radio.
const MIN_DWELL_MS: u32 = 30;

pub struct WifiScanner {
    #[cfg(target_os = "espidf")]
    driver: WifiDriver<'static>,
    /// Simulation: counts scan() calls for deterministic failures.
    #[cfg(not(target_os = "espidf"))]
    sim_scan_counter: u32,
    show_hidden: bool,
}

// ───────────────────────────────────────────────────────────────
// ESP-IDF implementation
// ───────────────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
impl WifiScanner {
    /// Bring the radio up in station mode, not associated to anything.
    pub fn new(
        modem: Modem,
        sysloop: EspSystemEventLoop,
        show_hidden: bool,
    ) -> crate::error::Result<Self> {
        let mut driver = WifiDriver::new(modem, sysloop, None).map_err(|e| {
            log::error!("WiFi driver init failed: {e}");
            crate::error::Error::Init("wifi driver")
        })?;

        driver
            .set_configuration(&Configuration::Client(ClientConfiguration::default()))
            .map_err(|e| {
                log::error!("WiFi station configuration failed: {e}");
                crate::error::Error::Init("wifi station mode")
            })?;

        driver.start().map_err(|e| {
            log::error!("WiFi start failed: {e}");
            crate::error::Error::Init("wifi start")
        })?;

        // Drop any stale association left over from a previous image; a
        // surveying station never joins a network.
        let _ = driver.disconnect();

        info!("WiFi: station mode up, scan-only");
        Ok(Self {
            driver,
            show_hidden,
        })
    }

    fn convert(ap: AccessPointInfo) -> NetworkObservation {
        NetworkObservation {
            ssid: ap.ssid,
            bssid: ap.bssid,
            signal_dbm: ap.signal_strength,
            channel: ap.channel,
            security: ap.auth_method.map_or(SecurityMode::Unknown, convert_auth),
        }
    }
}

#[cfg(target_os = "espidf")]
fn convert_auth(auth: AuthMethod) -> SecurityMode {
    match auth {
        AuthMethod::None => SecurityMode::Open,
        AuthMethod::WEP => SecurityMode::Wep,
        AuthMethod::WPA => SecurityMode::WpaPsk,
        AuthMethod::WPA2Personal => SecurityMode::Wpa2Psk,
        AuthMethod::WPAWPA2Personal => SecurityMode::WpaWpa2Psk,
        AuthMethod::WPA2Enterprise => SecurityMode::Wpa2Enterprise,
        AuthMethod::WPA3Personal => SecurityMode::Wpa3Psk,
        AuthMethod::WPA2WPA3Personal => SecurityMode::Wpa2Wpa3Psk,
        AuthMethod::WAPIPersonal => SecurityMode::WapiPsk,
        #[allow(unreachable_patterns)]
        _ => SecurityMode::Unknown,
    }
}

#[cfg(target_os = "espidf")]
impl ScanPort for WifiScanner {
    fn scan(&mut self, timeout_ms: u32) -> Result<ScanSession, ScanError> {
        if timeout_ms < MIN_DWELL_MS * SCAN_CHANNEL_COUNT {
            return Err(ScanError::Timeout);
        }

        // The IDF scan API has no overall deadline; spreading the budget
        // across the channel sweep bounds the blocking call instead.
        let dwell_ms = (timeout_ms / SCAN_CHANNEL_COUNT).clamp(MIN_DWELL_MS, 1_500);
        let scan_config = DriverScanConfig {
            scan_type: ScanType::Active {
                min: core::time::Duration::ZERO,
                max: core::time::Duration::from_millis(u64::from(dwell_ms)),
            },
            show_hidden: self.show_hidden,
            ..Default::default()
        };

        self.driver
            .start_scan(&scan_config, true)
            .map_err(|e| {
                log::error!("WiFi scan start failed: {e}");
                if e.code() == esp_idf_svc::sys::ESP_ERR_TIMEOUT {
                    ScanError::Timeout
                } else {
                    ScanError::Radio
                }
            })?;

        let aps = self.driver.get_scan_result().map_err(|e| {
            log::error!("WiFi scan result fetch failed: {e}");
            ScanError::Radio
        })?;

        Ok(ScanSession::new(aps.into_iter().map(Self::convert).collect()))
    }
}

// ───────────────────────────────────────────────────────────────
// Host simulation
// ───────────────────────────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
impl WifiScanner {
    pub fn new(show_hidden: bool) -> crate::error::Result<Self> {
        info!("WiFi(sim): station mode up, scan-only");
        Ok(Self {
            sim_scan_counter: 0,
            show_hidden,
        })
    }

    fn sim_observation(
        ssid: &str,
        last_octet: u8,
        signal_dbm: i8,
        channel: u8,
        security: SecurityMode,
    ) -> NetworkObservation {
        NetworkObservation {
            ssid: ssid.try_into().unwrap_or_default(),
            bssid: [0x02, 0x00, 0x5E, 0x10, 0x20, last_octet],
            signal_dbm,
            channel,
            security,
        }
    }
}

#[cfg(not(target_os = "espidf"))]
impl ScanPort for WifiScanner {
    fn scan(&mut self, timeout_ms: u32) -> Result<ScanSession, ScanError> {
        if timeout_ms < MIN_DWELL_MS * SCAN_CHANNEL_COUNT {
            return Err(ScanError::Timeout);
        }

        self.sim_scan_counter = self.sim_scan_counter.wrapping_add(1);

        // Every 7th scan fails so the failure report path stays exercised.
        if self.sim_scan_counter % 7 == 0 {
            log::warn!("WiFi(sim): injected radio failure (scan {})", self.sim_scan_counter);
            return Err(ScanError::Radio);
        }

        // A fixed neighbourhood in discovery (unsorted) order, with a small
        // RSSI oscillation to reflect realistic environment variation.
        let wobble = (self.sim_scan_counter % 3) as i8 - 1; // -1..=1
        let mut observations = vec![
            Self::sim_observation("CoffeeShop", 0x01, -72 + wobble, 6, SecurityMode::Open),
            Self::sim_observation("HomeNet-5G", 0x02, -45 + wobble, 11, SecurityMode::Wpa2Psk),
            Self::sim_observation("Office-Guest", 0x03, -58 + wobble, 1, SecurityMode::Wpa2Wpa3Psk),
            Self::sim_observation("Basement-AP", 0x04, -90 + wobble, 13, SecurityMode::Wpa3Psk),
        ];
        if self.show_hidden {
            observations.push(Self::sim_observation("", 0x05, -67 + wobble, 3, SecurityMode::Wpa2Psk));
        }

        info!("WiFi(sim): scan {} found {} network(s)", self.sim_scan_counter, observations.len());
        Ok(ScanSession::new(observations))
    }
}

// ───────────────────────────────────────────────────────────────
// Tests
// ───────────────────────────────────────────────────────────────
