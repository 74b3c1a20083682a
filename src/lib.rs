//! netscout firmware library.
//!
//! Exposes the survey domain and control logic for integration testing and
//! external inspection.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module, so the crate also
//! compiles for host targets with deterministic simulation adapters.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod pins;
pub mod report;
pub mod survey;

pub mod adapters;
pub mod drivers;
