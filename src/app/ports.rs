//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ScanService (domain)
//! ```
//!
//! Driven adapters (radio, serial console, status LED, platform diagnostics)
//! implement these traits.  The [`ScanService`](super::service::ScanService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use crate::survey::observation::ScanSession;

// ───────────────────────────────────────────────────────────────
// Scan port (driven adapter: radio → domain)
// ───────────────────────────────────────────────────────────────

/// Radio-facing port: the domain calls this to enumerate visible networks.
///
/// The call is synchronous and blocks for up to roughly `timeout_ms`
/// (bounded by the radio driver's per-channel dwell behaviour).  An empty
/// session is a legitimate result — "nothing in range" — and is distinct
/// from [`ScanError`], which means the scan itself did not complete.
pub trait ScanPort {
    fn scan(&mut self, timeout_ms: u32) -> Result<ScanSession, ScanError>;
}

/// Errors from [`ScanPort::scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The radio driver reported a failure.
    Radio,
    /// The scan did not complete within the configured budget.
    Timeout,
}

impl core::fmt::Display for ScanError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Radio => write!(f, "radio driver failure"),
            Self::Timeout => write!(f, "scan timed out"),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Report sink port (driven adapter: domain → serial console)
// ───────────────────────────────────────────────────────────────

/// Append-only text surface for the survey report.
///
/// The reporter emits complete lines; the adapter decides where they go
/// (UART console on device, a capture buffer in tests).  Keeping the
/// ranking/classification logic behind this seam means the same report can
/// feed an alternative surface without change.
pub trait ReportSink {
    fn line(&mut self, text: &str);

    /// Emit an empty line.
    fn blank(&mut self) {
        self.line("");
    }
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → status LED)
// ───────────────────────────────────────────────────────────────

/// Single status indicator with two roles: solid while a scan is in
/// progress, slow heartbeat blink otherwise.
pub trait IndicatorPort {
    /// Enter or leave the "scan in progress" state (solid on / off).
    fn set_scanning(&mut self, active: bool);

    /// Flip the heartbeat output.
    fn toggle_heartbeat(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Platform diagnostics port (read-only queries)
// ───────────────────────────────────────────────────────────────

/// Read-only platform facts for the boot banner and the post-scan memory
/// footer.  All queries are infallible — adapters substitute zeros when a
/// figure is unavailable rather than failing the report.
pub trait PlatformPort {
    /// Currently available heap, in bytes.
    fn heap_free(&self) -> u32;

    /// Historical minimum available heap since boot, in bytes.
    fn heap_min_free(&self) -> u32;

    fn cpu_freq_mhz(&self) -> u32;

    fn flash_size_bytes(&self) -> u32;

    fn chip_model(&self) -> &'static str;

    fn chip_revision(&self) -> u16;

    /// Factory-burned station MAC address.
    fn mac_address(&self) -> [u8; 6];
}
