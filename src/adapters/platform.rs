//! Platform diagnostics adapter.
//!
//! Read-only queries behind [`PlatformPort`]: heap headroom, CPU frequency,
//! flash size, chip identity, and the factory MAC.  Queried once at boot for
//! the banner and after every scan for the memory footer.
//!
//! ## cfg gating
//!
//! - **`target_os = "espidf"`**: raw `esp_idf_svc::sys` queries.
//! - **all other targets**: fixed synthetic values so simulation paths
//!   exercise the same report branches as real hardware.

use crate::app::ports::PlatformPort;

pub struct PlatformInfo;

impl Default for PlatformInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformInfo {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "espidf")]
impl PlatformPort for PlatformInfo {
    fn heap_free(&self) -> u32 {
        unsafe { esp_idf_svc::sys::esp_get_free_heap_size() }
    }

    fn heap_min_free(&self) -> u32 {
        unsafe { esp_idf_svc::sys::esp_get_minimum_free_heap_size() }
    }

    fn cpu_freq_mhz(&self) -> u32 {
        unsafe { esp_idf_svc::sys::ets_get_cpu_frequency() }
    }

    fn flash_size_bytes(&self) -> u32 {
        let mut size: u32 = 0;
        // NULL selects the default (boot) flash chip.
        let ret = unsafe { esp_idf_svc::sys::esp_flash_get_size(core::ptr::null_mut(), &mut size) };
        if ret == esp_idf_svc::sys::ESP_OK { size } else { 0 }
    }

    #[allow(non_upper_case_globals)]
    fn chip_model(&self) -> &'static str {
        use esp_idf_svc::sys::*;
        let mut info: esp_chip_info_t = unsafe { core::mem::zeroed() };
        unsafe { esp_chip_info(&mut info) };
        match info.model {
            esp_chip_model_t_CHIP_ESP32 => "ESP32",
            esp_chip_model_t_CHIP_ESP32S2 => "ESP32-S2",
            esp_chip_model_t_CHIP_ESP32S3 => "ESP32-S3",
            esp_chip_model_t_CHIP_ESP32C3 => "ESP32-C3",
            _ => "ESP32 (unknown model)",
        }
    }

    fn chip_revision(&self) -> u16 {
        let mut info: esp_idf_svc::sys::esp_chip_info_t = unsafe { core::mem::zeroed() };
        unsafe { esp_idf_svc::sys::esp_chip_info(&mut info) };
        info.revision
    }

    fn mac_address(&self) -> [u8; 6] {
        let mut mac = [0u8; 6];
        unsafe {
            esp_idf_svc::sys::esp_efuse_mac_get_default(mac.as_mut_ptr());
        }
        mac
    }
}

#[cfg(not(target_os = "espidf"))]
impl PlatformPort for PlatformInfo {
    fn heap_free(&self) -> u32 {
        307_200
    }

    fn heap_min_free(&self) -> u32 {
        261_120
    }

    fn cpu_freq_mhz(&self) -> u32 {
        240
    }

    fn flash_size_bytes(&self) -> u32 {
        16 * 1024 * 1024
    }

    fn chip_model(&self) -> &'static str {
        "ESP32-S3"
    }

    fn chip_revision(&self) -> u16 {
        0
    }

    fn mac_address(&self) -> [u8; 6] {
        [0xDE, 0xAD, 0xBE, 0xEF, 0xCA, 0xFE]
    }
}
