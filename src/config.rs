//! Survey timing parameters
//!
//! All tunable parameters for the netscout firmware.  Values are fixed at
//! build time; there is no configuration file or runtime surface — every
//! timer resets to these power-on values on each boot.

use serde::{Deserialize, Serialize};

/// Core survey configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    // --- Timing ---
    /// Interval between scan cycles (milliseconds)
    pub scan_interval_ms: u32,
    /// Upper bound for one blocking scan (milliseconds)
    pub scan_timeout_ms: u32,
    /// Heartbeat indicator toggle interval (milliseconds)
    pub blink_interval_ms: u32,
    /// Cooperative delay per control-loop iteration (milliseconds)
    pub loop_delay_ms: u32,

    // --- Scan behaviour ---
    /// Include hidden (empty-SSID) networks in results
    pub show_hidden: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            scan_interval_ms: 15_000, // scan every 15 seconds
            scan_timeout_ms: 10_000,
            blink_interval_ms: 500,
            loop_delay_ms: 10,

            show_hidden: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = ScannerConfig::default();
        assert!(c.scan_interval_ms > 0);
        assert!(c.blink_interval_ms > 0);
        assert!(c.loop_delay_ms > 0);
    }

    #[test]
    fn scan_timeout_fits_inside_interval() {
        let c = ScannerConfig::default();
        assert!(
            c.scan_timeout_ms < c.scan_interval_ms,
            "a scan must be able to finish before the next one is due"
        );
    }

    #[test]
    fn blink_is_faster_than_scan_cadence() {
        let c = ScannerConfig::default();
        assert!(c.blink_interval_ms < c.scan_interval_ms);
        assert!(c.loop_delay_ms < c.blink_interval_ms);
    }

    #[test]
    fn serde_roundtrip() {
        let c = ScannerConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: ScannerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.scan_interval_ms, c2.scan_interval_ms);
        assert_eq!(c.blink_interval_ms, c2.blink_interval_ms);
        assert_eq!(c.show_hidden, c2.show_hidden);
    }
}
