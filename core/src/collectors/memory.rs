use crate::document::MemoryModule;
use crate::utils::units::bytes_to_gb_rounded;
use serde::Deserialize;

#[cfg(target_os = "windows")]
use super::error::CollectorError;
#[cfg(target_os = "windows")]
use crate::management::Management;

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_PhysicalMemory")]
pub struct PhysicalMemoryRow {
    #[serde(rename = "PartNumber")]
    pub part_number: Option<String>,
    #[serde(rename = "Tag")]
    pub tag: Option<String>,
    #[serde(rename = "SerialNumber")]
    pub serial_number: Option<String>,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: Option<String>,
    #[serde(rename = "ConfiguredClockSpeed")]
    pub configured_clock_speed: Option<u32>,
    #[serde(rename = "ConfiguredVoltage")]
    pub configured_voltage: Option<u32>,
    #[serde(rename = "Capacity")]
    pub capacity: Option<u64>,
    #[serde(rename = "BankLabel")]
    pub bank_label: Option<String>,
    #[serde(rename = "DeviceLocator")]
    pub device_locator: Option<String>,
}

/// Project installed memory modules into report fields. Capacity is rounded
/// to one decimal place. Part numbers are reported with padding stripped
pub fn project_memory(rows: Vec<PhysicalMemoryRow>) -> Vec<MemoryModule> {
    let mut modules = Vec::new();
    for row in rows {
        modules.push(MemoryModule {
            part_number: row.part_number.unwrap_or_default().trim().to_string(),
            tag: row.tag.unwrap_or_default(),
            serial_number: row.serial_number.unwrap_or_default().trim().to_string(),
            manufacturer: row.manufacturer.unwrap_or_default().trim().to_string(),
            clock_speed: row.configured_clock_speed.unwrap_or(0),
            voltage: row.configured_voltage.unwrap_or(0),
            capacity_gb: bytes_to_gb_rounded(row.capacity.unwrap_or(0)),
            bank_label: row.bank_label.unwrap_or_default(),
            device_locator: row.device_locator.unwrap_or_default(),
        });
    }
    modules
}

#[cfg(target_os = "windows")]
/// Get installed physical memory modules
pub(crate) fn collect(interface: &Management) -> Result<Vec<MemoryModule>, CollectorError> {
    let rows: Vec<PhysicalMemoryRow> = interface.query()?;
    Ok(project_memory(rows))
}
