//! Hardware drivers for the status indicator and the task watchdog.

pub mod status_led;
pub mod watchdog;
