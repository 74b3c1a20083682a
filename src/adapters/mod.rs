//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements   | Connects to                  |
//! |------------|--------------|------------------------------|
//! | `wifi`     | ScanPort     | ESP-IDF WiFi STA driver      |
//! | `console`  | ReportSink   | Serial (UART0) text output   |
//! | `platform` | PlatformPort | Heap/chip/flash/MAC queries  |
//! | `time`     | —            | ESP32 monotonic system timer |

pub mod console;
pub mod platform;
pub mod time;
pub mod wifi;
