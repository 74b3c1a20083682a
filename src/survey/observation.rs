//! Scan-result snapshot types.
//!
//! A [`NetworkObservation`] is an immutable record of one access point as seen
//! during a single scan pass.  Observations are owned by their
//! [`ScanSession`] and never outlive it — the session is created at scan
//! start, sorted in place, rendered, then dropped.

use crate::survey::rank::rank_by_signal;

/// Security mode of an observed access point.
///
/// Mirrors the IDF auth-mode enumerants.  [`SecurityMode::Unknown`] is the
/// total-lookup fallback: any enumerant this firmware does not recognise
/// (including ones added by future IDF releases) maps here rather than
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityMode {
    Open,
    Wep,
    WpaPsk,
    Wpa2Psk,
    WpaWpa2Psk,
    Wpa2Enterprise,
    Wpa3Psk,
    Wpa2Wpa3Psk,
    WapiPsk,
    Unknown,
}

impl SecurityMode {
    /// Human-readable label for the survey report.  Total — every variant
    /// has a defined string.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Wep => "WEP",
            Self::WpaPsk => "WPA-PSK",
            Self::Wpa2Psk => "WPA2-PSK",
            Self::WpaWpa2Psk => "WPA/WPA2-PSK",
            Self::Wpa2Enterprise => "WPA2-Enterprise",
            Self::Wpa3Psk => "WPA3-PSK",
            Self::Wpa2Wpa3Psk => "WPA2/WPA3-PSK",
            Self::WapiPsk => "WAPI-PSK",
            Self::Unknown => "Unknown",
        }
    }
}

/// One access point as observed during a single scan pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkObservation {
    /// Network name.  Hidden networks scan as an empty SSID.
    pub ssid: heapless::String<32>,
    /// Hardware (BSSID) address.
    pub bssid: [u8; 6],
    /// Received signal strength in dBm (always negative in practice).
    pub signal_dbm: i8,
    /// 2.4 GHz channel number (1–14).
    pub channel: u8,
    /// Security mode reported by the radio.
    pub security: SecurityMode,
}

/// The ordered collection of observations from one scan pass.
#[derive(Debug, Default)]
pub struct ScanSession {
    observations: Vec<NetworkObservation>,
}

impl ScanSession {
    pub fn new(observations: Vec<NetworkObservation>) -> Self {
        Self { observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, NetworkObservation> {
        self.observations.iter()
    }

    /// Sort observations in place, strongest signal first.
    ///
    /// Applies the permutation from [`rank_by_signal`], so ties keep their
    /// discovery order.  Re-sorting an already-sorted session is a no-op.
    pub fn sort_by_signal(&mut self) {
        let order = rank_by_signal(&self.observations);
        let ranked: Vec<NetworkObservation> = order
            .into_iter()
            .map(|i| self.observations[i].clone())
            .collect();
        self.observations = ranked;
    }
}
