//! Scan-cycle controller — the hexagonal core.
//!
//! [`ScanService`] owns the survey timer state: the last-scan and last-blink
//! timestamps plus the running scan counter.  There are no process-wide
//! globals — the service is constructed in `main()` and driven by reference
//! from the control loop.
//!
//! ```text
//!   ScanPort ──▶ ┌────────────────────────┐ ──▶ ReportSink
//!                │      ScanService        │
//!  PlatformPort ─▶  rank · classify · time │ ──▶ IndicatorPort
//!                └────────────────────────┘
//! ```
//!
//! Two independent timers:
//! - **Scan timer** — fires every `scan_interval_ms`; the cycle is
//!   synchronous, so the blink timer is not serviced while a scan runs.
//! - **Blink timer** — toggles the heartbeat indicator every
//!   `blink_interval_ms`, regardless of scan cadence.

use log::{info, warn};

use crate::config::ScannerConfig;
use crate::app::ports::{IndicatorPort, PlatformPort, ReportSink, ScanPort};
use crate::report;

/// Orchestrates the periodic scan → rank → report cycle.
pub struct ScanService {
    config: ScannerConfig,
    /// Timestamp of the last completed scan cycle (ms since boot).
    last_scan_ms: u64,
    /// Timestamp of the last heartbeat toggle (ms since boot).
    last_blink_ms: u64,
    /// Completed scan cycles since boot.
    scan_count: u32,
}

impl ScanService {
    pub fn new(config: ScannerConfig) -> Self {
        Self {
            config,
            last_scan_ms: 0,
            last_blink_ms: 0,
            scan_count: 0,
        }
    }

    pub fn scan_count(&self) -> u32 {
        self.scan_count
    }

    /// Run the unconditional boot-time scan cycle.
    ///
    /// Call [`arm`](Self::arm) with a timestamp captured afterwards so the
    /// boot scan's own duration does not eat into the first interval.
    pub fn startup(
        &mut self,
        radio: &mut impl ScanPort,
        indicator: &mut impl IndicatorPort,
        sink: &mut impl ReportSink,
        platform: &impl PlatformPort,
    ) {
        info!("Boot survey cycle");
        self.run_cycle(radio, indicator, sink, platform);
    }

    /// Initialise both timers relative to `now_ms`.  The first periodic scan
    /// lands one full interval after this point.
    pub fn arm(&mut self, now_ms: u64) {
        self.last_scan_ms = now_ms;
        self.last_blink_ms = now_ms;
    }

    /// One control-loop iteration at monotonic time `now_ms`.
    ///
    /// The scan check runs first with the timestamp captured at iteration
    /// start; the blink check follows in the same iteration, so a long scan
    /// delays (but never drops) the next heartbeat toggle.
    pub fn tick(
        &mut self,
        now_ms: u64,
        radio: &mut impl ScanPort,
        indicator: &mut impl IndicatorPort,
        sink: &mut impl ReportSink,
        platform: &impl PlatformPort,
    ) {
        if now_ms - self.last_scan_ms >= u64::from(self.config.scan_interval_ms) {
            self.run_cycle(radio, indicator, sink, platform);
            self.last_scan_ms = now_ms;
        }

        if now_ms - self.last_blink_ms >= u64::from(self.config.blink_interval_ms) {
            indicator.toggle_heartbeat();
            self.last_blink_ms = now_ms;
        }
    }

    /// One full scan → rank → report cycle.
    ///
    /// Nothing here is fatal: a failed scan is reported and the periodic
    /// timer retries on the next interval.
    fn run_cycle(
        &mut self,
        radio: &mut impl ScanPort,
        indicator: &mut impl IndicatorPort,
        sink: &mut impl ReportSink,
        platform: &impl PlatformPort,
    ) {
        report::cycle_header(sink);

        indicator.set_scanning(true);
        let outcome = radio.scan(self.config.scan_timeout_ms);
        indicator.set_scanning(false);

        report::cycle_complete(sink);

        match outcome {
            Ok(mut session) => {
                session.sort_by_signal();
                info!("Scan found {} network(s)", session.len());
                report::session(sink, &session);
            }
            Err(e) => {
                // Distinct from "no networks found" — the scan itself
                // did not complete.
                warn!("Scan failed: {}", e);
                report::scan_failure(sink, e);
            }
        }

        self.scan_count += 1;
        report::memory_footer(sink, platform, self.scan_count);
    }
}
