//! Serial console report sink.
//!
//! Writes report lines to stdout, which ESP-IDF routes to the UART0
//! console (baud/framing fixed by the IDF bootloader configuration).  The
//! same implementation serves host runs.

use crate::app::ports::ReportSink;

#[derive(Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for ConsoleSink {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}
