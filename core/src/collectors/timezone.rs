use crate::document::TimeZoneInfo;
use serde::Deserialize;

#[cfg(target_os = "windows")]
use super::error::CollectorError;
#[cfg(target_os = "windows")]
use crate::management::Management;
#[cfg(target_os = "windows")]
use log::error;

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_TimeZone")]
pub struct TimeZoneRow {
    #[serde(rename = "Bias")]
    pub bias: Option<i32>,
    #[serde(rename = "Caption")]
    pub caption: Option<String>,
    #[serde(rename = "StandardName")]
    pub standard_name: Option<String>,
}

/// Project the local time zone instance into report fields
pub fn project_timezone(rows: Vec<TimeZoneRow>) -> Option<TimeZoneInfo> {
    rows.into_iter().next().map(|row| TimeZoneInfo {
        bias: row.bias.unwrap_or(0),
        caption: row.caption.unwrap_or_default(),
        standard_name: row.standard_name.unwrap_or_default(),
    })
}

#[cfg(target_os = "windows")]
/// Get the local time zone offset
pub(crate) fn collect(interface: &Management) -> Result<TimeZoneInfo, CollectorError> {
    let rows: Vec<TimeZoneRow> = interface.query()?;
    let zone = match project_timezone(rows) {
        Some(result) => result,
        None => {
            error!("[hostinv-core] No Win32_TimeZone instance returned");
            return Err(CollectorError::EmptyClass);
        }
    };
    Ok(zone)
}
