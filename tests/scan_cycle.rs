//! End-to-end survey cycle tests.
//!
//! Drive a [`ScanService`] through recording mocks and assert on the full
//! report and indicator history, without touching real radio or GPIO.

#![cfg(not(target_os = "espidf"))]

use netscout::app::ports::{
    IndicatorPort, PlatformPort, ReportSink, ScanError, ScanPort,
};
use netscout::app::service::ScanService;
use netscout::config::ScannerConfig;
use netscout::survey::observation::{NetworkObservation, ScanSession, SecurityMode};

// ── Mocks ─────────────────────────────────────────────────────

/// Radio mock that replays a queue of scripted scan outcomes.
struct ScriptedRadio {
    script: Vec<Result<Vec<NetworkObservation>, ScanError>>,
    scans: usize,
}

impl ScriptedRadio {
    fn new(script: Vec<Result<Vec<NetworkObservation>, ScanError>>) -> Self {
        Self { script, scans: 0 }
    }

    fn always_empty() -> Self {
        Self { script: Vec::new(), scans: 0 }
    }
}

impl ScanPort for ScriptedRadio {
    fn scan(&mut self, _timeout_ms: u32) -> Result<ScanSession, ScanError> {
        let outcome = if self.scans < self.script.len() {
            self.script[self.scans].clone()
        } else {
            Ok(Vec::new())
        };
        self.scans += 1;
        outcome.map(ScanSession::new)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndicatorEvent {
    Scanning(bool),
    Toggle,
}

#[derive(Default)]
struct RecordingIndicator {
    events: Vec<IndicatorEvent>,
}

impl RecordingIndicator {
    fn toggles(&self) -> usize {
        self.events
            .iter()
            .filter(|e| **e == IndicatorEvent::Toggle)
            .count()
    }
}

impl IndicatorPort for RecordingIndicator {
    fn set_scanning(&mut self, active: bool) {
        self.events.push(IndicatorEvent::Scanning(active));
    }

    fn toggle_heartbeat(&mut self) {
        self.events.push(IndicatorEvent::Toggle);
    }
}

#[derive(Default)]
struct CaptureSink {
    lines: Vec<String>,
}

impl CaptureSink {
    fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l == needle)
    }
}

impl ReportSink for CaptureSink {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

struct FakePlatform;

impl PlatformPort for FakePlatform {
    fn heap_free(&self) -> u32 {
        250_000
    }
    fn heap_min_free(&self) -> u32 {
        200_000
    }
    fn cpu_freq_mhz(&self) -> u32 {
        240
    }
    fn flash_size_bytes(&self) -> u32 {
        8 * 1024 * 1024
    }
    fn chip_model(&self) -> &'static str {
        "ESP32-S3"
    }
    fn chip_revision(&self) -> u16 {
        1
    }
    fn mac_address(&self) -> [u8; 6] {
        [0xA0, 0xB1, 0xC2, 0xD3, 0xE4, 0xF5]
    }
}

fn obs(ssid: &str, dbm: i8) -> NetworkObservation {
    NetworkObservation {
        ssid: ssid.try_into().unwrap(),
        bssid: [0x10, 0x20, 0x30, 0x40, 0x50, 0x60],
        signal_dbm: dbm,
        channel: 6,
        security: SecurityMode::Wpa2Psk,
    }
}

fn survey_scenario() -> Vec<NetworkObservation> {
    // Discovery order deliberately unsorted.
    vec![
        obs("alpha", -45),
        obs("bravo", -72),
        obs("charlie", -58),
        obs("delta", -90),
    ]
}

// ── Report content ────────────────────────────────────────────

#[test]
fn boot_cycle_reports_networks_ranked_and_banded() {
    let mut svc = ScanService::new(ScannerConfig::default());
    let mut radio = ScriptedRadio::new(vec![Ok(survey_scenario())]);
    let mut led = RecordingIndicator::default();
    let mut sink = CaptureSink::default();

    svc.startup(&mut radio, &mut led, &mut sink, &FakePlatform);
    svc.arm(0);

    let signal_lines: Vec<&String> = sink
        .lines
        .iter()
        .filter(|l| l.starts_with("    Signal:"))
        .collect();
    assert_eq!(
        signal_lines,
        vec![
            "    Signal: -45 dBm (Excellent)",
            "    Signal: -58 dBm (Good)",
            "    Signal: -72 dBm (Fair)",
            "    Signal: -90 dBm (Very Weak)",
        ]
    );

    assert!(sink.contains("Found 4 network(s):"));
    assert!(sink.contains(" 1: alpha"));
    assert!(sink.contains(" 2: charlie"));
    assert!(sink.contains(" 3: bravo"));
    assert!(sink.contains(" 4: delta"));
}

#[test]
fn empty_scan_reports_none_and_no_blocks() {
    let mut svc = ScanService::new(ScannerConfig::default());
    let mut radio = ScriptedRadio::always_empty();
    let mut led = RecordingIndicator::default();
    let mut sink = CaptureSink::default();

    svc.startup(&mut radio, &mut led, &mut sink, &FakePlatform);
    svc.arm(0);

    assert!(sink.contains("No networks found."));
    assert!(
        !sink.lines.iter().any(|l| l.contains("BSSID:")),
        "an empty survey must not print per-network blocks"
    );
}

#[test]
fn scan_failure_reported_distinctly_from_empty() {
    let mut svc = ScanService::new(ScannerConfig::default());
    let mut radio = ScriptedRadio::new(vec![Err(ScanError::Radio)]);
    let mut led = RecordingIndicator::default();
    let mut sink = CaptureSink::default();

    svc.startup(&mut radio, &mut led, &mut sink, &FakePlatform);
    svc.arm(0);

    assert!(sink.contains("Scan failed: radio driver failure."));
    assert!(!sink.contains("No networks found."));
}

#[test]
fn timed_out_scan_reported_as_timeout() {
    let mut svc = ScanService::new(ScannerConfig::default());
    let mut radio = ScriptedRadio::new(vec![Err(ScanError::Timeout)]);
    let mut led = RecordingIndicator::default();
    let mut sink = CaptureSink::default();

    svc.startup(&mut radio, &mut led, &mut sink, &FakePlatform);
    svc.arm(0);

    assert!(sink.contains("Scan failed: scan timed out."));
    assert!(sink.contains("Scan #1 complete"), "a timed-out cycle still counts");
}

#[test]
fn footer_reports_heap_and_scan_counter() {
    let mut svc = ScanService::new(ScannerConfig::default());
    let mut radio = ScriptedRadio::always_empty();
    let mut led = RecordingIndicator::default();
    let mut sink = CaptureSink::default();

    svc.startup(&mut radio, &mut led, &mut sink, &FakePlatform);
    svc.arm(0);
    assert!(sink.contains("Free Heap: 250000 bytes"));
    assert!(sink.contains("Min Free Heap: 200000 bytes"));
    assert!(sink.contains("Scan #1 complete"));

    sink.lines.clear();
    svc.tick(15_000, &mut radio, &mut led, &mut sink, &FakePlatform);
    assert!(sink.contains("Scan #2 complete"));
}

// ── Timer gating ──────────────────────────────────────────────

#[test]
fn scan_fires_exactly_on_crossing_the_interval() {
    let mut svc = ScanService::new(ScannerConfig::default());
    let mut radio = ScriptedRadio::always_empty();
    let mut led = RecordingIndicator::default();
    let mut sink = CaptureSink::default();

    svc.startup(&mut radio, &mut led, &mut sink, &FakePlatform);
    svc.arm(0);
    assert_eq!(radio.scans, 1);

    svc.tick(14_999, &mut radio, &mut led, &mut sink, &FakePlatform);
    assert_eq!(radio.scans, 1, "14999 ms elapsed: no scan yet");

    svc.tick(15_001, &mut radio, &mut led, &mut sink, &FakePlatform);
    assert_eq!(radio.scans, 2, "15001 ms elapsed: scan due");
}

#[test]
fn next_interval_counts_from_the_triggering_tick() {
    let mut svc = ScanService::new(ScannerConfig::default());
    let mut radio = ScriptedRadio::always_empty();
    let mut led = RecordingIndicator::default();
    let mut sink = CaptureSink::default();

    svc.startup(&mut radio, &mut led, &mut sink, &FakePlatform);
    svc.arm(0);
    svc.tick(15_001, &mut radio, &mut led, &mut sink, &FakePlatform);
    assert_eq!(radio.scans, 2);

    svc.tick(30_000, &mut radio, &mut led, &mut sink, &FakePlatform);
    assert_eq!(radio.scans, 2, "next window starts at the trigger timestamp");
    svc.tick(30_001, &mut radio, &mut led, &mut sink, &FakePlatform);
    assert_eq!(radio.scans, 3);
}

// ── Indicator behaviour ───────────────────────────────────────

#[test]
fn heartbeat_cadence_is_independent_of_scan_timing() {
    let mut svc = ScanService::new(ScannerConfig::default());
    let mut radio = ScriptedRadio::always_empty();
    let mut led = RecordingIndicator::default();
    let mut sink = CaptureSink::default();

    svc.startup(&mut radio, &mut led, &mut sink, &FakePlatform);
    svc.arm(0);

    // 100 ms loop granularity for three seconds: one toggle per 500 ms.
    for t in (100..=3_000).step_by(100) {
        svc.tick(t, &mut radio, &mut led, &mut sink, &FakePlatform);
    }
    assert_eq!(led.toggles(), 6);
}

#[test]
fn indicator_solid_during_cycle_then_released() {
    let mut svc = ScanService::new(ScannerConfig::default());
    let mut radio = ScriptedRadio::always_empty();
    let mut led = RecordingIndicator::default();
    let mut sink = CaptureSink::default();

    svc.startup(&mut radio, &mut led, &mut sink, &FakePlatform);
    svc.arm(0);

    assert_eq!(
        led.events,
        vec![
            IndicatorEvent::Scanning(true),
            IndicatorEvent::Scanning(false),
        ]
    );
}

#[test]
fn blink_resumes_after_scan_cycle() {
    let mut svc = ScanService::new(ScannerConfig::default());
    let mut radio = ScriptedRadio::always_empty();
    let mut led = RecordingIndicator::default();
    let mut sink = CaptureSink::default();

    svc.startup(&mut radio, &mut led, &mut sink, &FakePlatform);
    svc.arm(0);
    // A tick that both scans and is past the blink window does both,
    // scan first.
    svc.tick(15_000, &mut radio, &mut led, &mut sink, &FakePlatform);

    let scan_off = led
        .events
        .iter()
        .rposition(|e| *e == IndicatorEvent::Scanning(false))
        .unwrap();
    let last_toggle = led
        .events
        .iter()
        .rposition(|e| *e == IndicatorEvent::Toggle)
        .unwrap();
    assert!(last_toggle > scan_off, "heartbeat toggle follows the scan");
}
