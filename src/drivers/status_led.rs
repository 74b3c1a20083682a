//! Status LED driver.
//!
//! One digital output with two roles, implemented behind
//! [`IndicatorPort`]: solid on while a scan is in progress, slow heartbeat
//! blink between scans.  The blink cadence itself lives in the
//! [`ScanService`](crate::app::service::ScanService) — this driver only
//! flips the pin.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives a GPIO via `PinDriver`.
//! On host/test: tracks state in-memory only.

use crate::app::ports::IndicatorPort;

#[cfg(target_os = "espidf")]
use embedded_hal::digital::OutputPin;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::gpio::{AnyOutputPin, Output, PinDriver};

pub struct StatusLed {
    #[cfg(target_os = "espidf")]
    pin: PinDriver<'static, AnyOutputPin, Output>,
    on: bool,
}

impl StatusLed {
    #[cfg(target_os = "espidf")]
    pub fn new() -> crate::error::Result<Self> {
        // Safety: sole claimant of this line — no other driver touches
        // `pins::STATUS_LED_GPIO`.
        let pin = unsafe { AnyOutputPin::new(crate::pins::STATUS_LED_GPIO) };
        let mut pin = PinDriver::output(pin)
            .map_err(|_| crate::error::Error::Init("status LED gpio"))?;
        let _ = pin.set_low();
        Ok(Self { pin, on: false })
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new() -> crate::error::Result<Self> {
        Ok(Self { on: false })
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    fn apply(&mut self) {
        #[cfg(target_os = "espidf")]
        {
            let _ = if self.on {
                self.pin.set_high()
            } else {
                self.pin.set_low()
            };
        }
    }
}

impl IndicatorPort for StatusLed {
    fn set_scanning(&mut self, active: bool) {
        self.on = active;
        self.apply();
    }

    fn toggle_heartbeat(&mut self) {
        self.on = !self.on;
        self.apply();
    }
}

#[cfg(all(test, not(target_os = "espidf")))]
mod tests {
    use super::*;

    #[test]
    fn starts_off() {
        let led = StatusLed::new().unwrap();
        assert!(!led.is_on());
    }

    #[test]
    fn scanning_is_solid_then_off() {
        let mut led = StatusLed::new().unwrap();
        led.set_scanning(true);
        assert!(led.is_on());
        led.set_scanning(false);
        assert!(!led.is_on());
    }

    #[test]
    fn heartbeat_alternates() {
        let mut led = StatusLed::new().unwrap();
        led.toggle_heartbeat();
        assert!(led.is_on());
        led.toggle_heartbeat();
        assert!(!led.is_on());
    }
}
