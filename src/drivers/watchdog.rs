//! Task Watchdog Timer (TWDT) driver.
//!
//! The survey loop feeds the TWDT on every iteration.  The timeout must
//! outlast a full blocking scan, which can hold the loop for the whole
//! scan budget, so it is set well above `scan_timeout_ms`.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

/// TWDT timeout.  A blocking scan plus report rendering stays far below this.
#[cfg(target_os = "espidf")]
const WATCHDOG_TIMEOUT_MS: u32 = 30_000;

pub struct Watchdog {
    #[cfg(target_os = "espidf")]
    subscribed: bool,
}

impl Default for Watchdog {
    fn default() -> Self {
        Self::new()
    }
}

impl Watchdog {
    /// Initialise and subscribe the current task to the TWDT.
    pub fn new() -> Self {
        #[cfg(target_os = "espidf")]
        {
            unsafe {
                let cfg = esp_task_wdt_config_t {
                    timeout_ms: WATCHDOG_TIMEOUT_MS,
                    idle_core_mask: 0,
                    trigger_panic: true,
                };
                if esp_task_wdt_reconfigure(&cfg) != ESP_OK {
                    log::warn!("TWDT reconfigure failed (may already be configured)");
                }

                let subscribed = esp_task_wdt_add(core::ptr::null_mut()) == ESP_OK;
                if subscribed {
                    log::info!("Watchdog: subscribed ({}s timeout)", WATCHDOG_TIMEOUT_MS / 1000);
                } else {
                    log::warn!("Watchdog: failed to subscribe");
                }

                Self { subscribed }
            }
        }

        #[cfg(not(target_os = "espidf"))]
        {
            log::info!("Watchdog(sim): no-op");
            Self {}
        }
    }

    /// Feed the watchdog.  Called once per loop iteration.
    pub fn feed(&self) {
        #[cfg(target_os = "espidf")]
        {
            if self.subscribed {
                unsafe {
                    esp_task_wdt_reset();
                }
            }
        }
    }
}
