//! netscout firmware — main entry point.
//!
//! Hexagonal architecture around a single-threaded survey loop:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  WifiScanner   ConsoleSink   PlatformInfo   StatusLed    │
//! │  (ScanPort)    (ReportSink)  (PlatformPort) (Indicator)  │
//! │                                                          │
//! │  ───────────── Port Trait Boundary ─────────────────     │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │           ScanService (pure logic)             │      │
//! │  │  scan timer · blink timer · rank · classify    │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::peripherals::Peripherals;

use netscout::adapters::console::ConsoleSink;
use netscout::adapters::platform::PlatformInfo;
use netscout::adapters::time::MonotonicClock;
use netscout::adapters::wifi::WifiScanner;
use netscout::app::service::ScanService;
use netscout::config::ScannerConfig;
use netscout::drivers::status_led::StatusLed;
use netscout::drivers::watchdog::Watchdog;
use netscout::report;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("netscout v{} starting", env!("CARGO_PKG_VERSION"));

    // Give a just-attached serial monitor time to catch the banner.
    FreeRtos::delay_ms(5_000);

    // ── 2. Peripherals and adapters ───────────────────────────
    let peripherals = Peripherals::take()?;
    let sysloop = EspSystemEventLoop::take()?;

    let config = ScannerConfig::default();
    let clock = MonotonicClock::new();
    let platform = PlatformInfo::new();
    let mut sink = ConsoleSink::new();
    let mut led = StatusLed::new()?;
    let watchdog = Watchdog::new();

    report::boot_banner(&mut sink, &platform);

    let mut radio = WifiScanner::new(peripherals.modem, sysloop, config.show_hidden)?;
    report::station_ready(&mut sink);

    // ── 3. Boot scan, then the survey loop ────────────────────
    let mut service = ScanService::new(config.clone());
    service.startup(&mut radio, &mut led, &mut sink, &platform);
    // Arm the timers only once the boot scan has finished, so its duration
    // does not eat into the first interval.
    service.arm(clock.uptime_ms());

    info!("Entering survey loop");
    loop {
        service.tick(clock.uptime_ms(), &mut radio, &mut led, &mut sink, &platform);
        watchdog.feed();

        // Cooperative yield — keeps idle-priority housekeeping (and the
        // idle-task watchdog) serviced without suspending our own logic.
        FreeRtos::delay_ms(config.loop_delay_ms);
    }
}
