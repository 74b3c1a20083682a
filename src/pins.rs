//! GPIO assignments for the ESP32-S3-WROOM-1 DevKitC.
//!
//! Single source of truth — drivers reference this module rather than
//! hard-coding pin numbers.

/// On-board status LED (the devkit routes its RGB LED data line here; we
/// drive it as a plain digital output).
pub const STATUS_LED_GPIO: i32 = 48;
