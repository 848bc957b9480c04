use crate::document::ProcessorInfo;
use serde::Deserialize;

#[cfg(target_os = "windows")]
use super::error::CollectorError;
#[cfg(target_os = "windows")]
use crate::management::Management;

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_Processor")]
pub struct ProcessorRow {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: Option<String>,
    #[serde(rename = "MaxClockSpeed")]
    pub max_clock_speed: Option<u32>,
    #[serde(rename = "NumberOfCores")]
    pub number_of_cores: Option<u32>,
    #[serde(rename = "NumberOfLogicalProcessors")]
    pub number_of_logical_processors: Option<u32>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
}

/// Project processor instances into report fields
pub fn project_processors(rows: Vec<ProcessorRow>) -> Vec<ProcessorInfo> {
    let mut processors = Vec::new();
    for row in rows {
        processors.push(ProcessorInfo {
            name: row.name.unwrap_or_default(),
            manufacturer: row.manufacturer.unwrap_or_default(),
            max_clock_speed: row.max_clock_speed.unwrap_or(0),
            number_of_cores: row.number_of_cores.unwrap_or(0),
            number_of_logical_processors: row.number_of_logical_processors.unwrap_or(0),
            status: row.status.unwrap_or_default(),
        });
    }
    processors
}

#[cfg(target_os = "windows")]
/// Get CPU identity and capacity
pub(crate) fn collect(interface: &Management) -> Result<Vec<ProcessorInfo>, CollectorError> {
    let rows: Vec<ProcessorRow> = interface.query()?;
    Ok(project_processors(rows))
}
