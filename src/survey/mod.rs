//! Survey domain — pure scan-result data and logic, zero I/O.
//!
//! One scan pass produces a [`ScanSession`](observation::ScanSession) of
//! [`NetworkObservation`](observation::NetworkObservation)s.  The session is
//! ranked by signal strength ([`rank`]), classified into qualitative bands
//! ([`classify`]), rendered by the reporter, then dropped.  Nothing in this
//! module touches hardware or the console.

pub mod classify;
pub mod observation;
pub mod rank;
