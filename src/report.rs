//! Survey report formatting.
//!
//! Renders the banner, per-cycle report blocks, and memory footer as plain
//! text lines through a [`ReportSink`].  Line-oriented and human-readable;
//! there is no machine-parseable schema.  All formatting lives here so the
//! ranking/classification logic stays presentation-free.

use crate::app::ports::{PlatformPort, ReportSink, ScanError};
use crate::survey::classify::SignalBand;
use crate::survey::observation::ScanSession;

const RULE: &str = "========================================";

/// Canonical colon-separated uppercase hex MAC form ("AA:BB:CC:DD:EE:FF").
pub fn format_mac(mac: &[u8; 6]) -> heapless::String<17> {
    let mut s = heapless::String::new();
    use core::fmt::Write;
    let _ = write!(
        s,
        "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
        mac[0], mac[1], mac[2], mac[3], mac[4], mac[5]
    );
    s
}

/// One-time boot banner with platform facts.
pub fn boot_banner(sink: &mut impl ReportSink, platform: &impl PlatformPort) {
    sink.blank();
    sink.line(RULE);
    sink.line("   ESP32-S3 WiFi Scanner");
    sink.line(RULE);
    sink.line("Board: ESP32-S3-WROOM-1");
    sink.line(&format!("CPU Freq: {} MHz", platform.cpu_freq_mhz()));
    sink.line(&format!(
        "Flash Size: {} MB",
        platform.flash_size_bytes() / 1024 / 1024
    ));
    sink.line(&format!("Free Heap: {} bytes", platform.heap_free()));
    sink.line(&format!("Chip Model: {}", platform.chip_model()));
    sink.line(&format!("Chip Revision: {}", platform.chip_revision()));
    sink.line(&format!(
        "MAC Address: {}",
        format_mac(&platform.mac_address())
    ));
    sink.line(RULE);
    sink.blank();
}

/// Printed once the radio is up, just before the boot scan.
pub fn station_ready(sink: &mut impl ReportSink) {
    sink.line("WiFi initialized in Station mode.");
    sink.line("Ready to scan!");
    sink.blank();
}

/// Opens one scan cycle.
pub fn cycle_header(sink: &mut impl ReportSink) {
    sink.blank();
    sink.line(RULE);
    sink.line("       WiFi Network Scanner");
    sink.line(RULE);
    sink.line("Scanning for networks...");
}

/// Closes the scanning phase of a cycle.
pub fn cycle_complete(sink: &mut impl ReportSink) {
    sink.line("Scan complete!");
    sink.line(RULE);
    sink.blank();
}

/// Render a ranked session: one block per observation, or the explicit
/// "No networks found." line for an empty session.
pub fn session(sink: &mut impl ReportSink, session: &ScanSession) {
    if session.is_empty() {
        sink.line("No networks found.");
        return;
    }

    sink.line(&format!("Found {} network(s):", session.len()));
    sink.blank();

    for (rank, obs) in session.iter().enumerate() {
        let band = SignalBand::from_dbm(obs.signal_dbm);
        sink.line(&format!("{:2}: {}", rank + 1, obs.ssid));
        sink.line(&format!("    BSSID: {}", format_mac(&obs.bssid)));
        sink.line(&format!(
            "    Signal: {} dBm ({})",
            obs.signal_dbm,
            band.label()
        ));
        sink.line(&format!("    Channel: {}", obs.channel));
        sink.line(&format!("    Security: {}", obs.security.label()));
        sink.blank();
    }
}

/// Render a failed scan — distinct from an empty result.
pub fn scan_failure(sink: &mut impl ReportSink, error: ScanError) {
    sink.line(&format!("Scan failed: {}.", error));
}

/// Post-cycle memory diagnostics and scan counter.
pub fn memory_footer(sink: &mut impl ReportSink, platform: &impl PlatformPort, scan_number: u32) {
    sink.line(RULE);
    sink.line(&format!("Free Heap: {} bytes", platform.heap_free()));
    sink.line(&format!("Min Free Heap: {} bytes", platform.heap_min_free()));
    sink.line(&format!("Scan #{} complete", scan_number));
    sink.line(RULE);
}
