//! Application core — scan-cycle orchestration, zero I/O.
//!
//! The [`service::ScanService`] owns the two survey timers and the scan
//! counter.  All interaction with hardware happens through the **port
//! traits** defined in [`ports`], keeping this layer fully testable without
//! real peripherals.

pub mod ports;
pub mod service;
