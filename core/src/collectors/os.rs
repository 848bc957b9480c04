use crate::document::OperatingSystemInfo;
use crate::utils::time::cim_datetime_to_rfc3339;
use serde::Deserialize;

#[cfg(target_os = "windows")]
use super::error::CollectorError;
#[cfg(target_os = "windows")]
use crate::management::Management;
#[cfg(target_os = "windows")]
use log::error;

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_OperatingSystem")]
pub struct OperatingSystemRow {
    #[serde(rename = "Caption")]
    pub caption: Option<String>,
    #[serde(rename = "BuildNumber")]
    pub build_number: Option<String>,
    #[serde(rename = "Version")]
    pub version: Option<String>,
    #[serde(rename = "SerialNumber")]
    pub serial_number: Option<String>,
    #[serde(rename = "InstallDate")]
    pub install_date: Option<String>,
    #[serde(rename = "LastBootUpTime")]
    pub last_boot_up_time: Option<String>,
    #[serde(rename = "OSArchitecture")]
    pub os_architecture: Option<String>,
}

/// Project the OS instance into report fields. CIM datetimes are converted
/// to RFC 3339
pub fn project_os(rows: Vec<OperatingSystemRow>) -> Option<OperatingSystemInfo> {
    rows.into_iter().next().map(|row| OperatingSystemInfo {
        caption: row.caption.unwrap_or_default(),
        build_number: row.build_number.unwrap_or_default(),
        version: row.version.unwrap_or_default(),
        serial_number: row.serial_number.unwrap_or_default(),
        install_date: cim_datetime_to_rfc3339(&row.install_date.unwrap_or_default()),
        last_boot_time: cim_datetime_to_rfc3339(&row.last_boot_up_time.unwrap_or_default()),
        architecture: row.os_architecture.unwrap_or_default(),
    })
}

#[cfg(target_os = "windows")]
/// Get OS build and version metadata
pub(crate) fn collect(interface: &Management) -> Result<OperatingSystemInfo, CollectorError> {
    let rows: Vec<OperatingSystemRow> = interface.query()?;
    let os = match project_os(rows) {
        Some(result) => result,
        None => {
            error!("[hostinv-core] No Win32_OperatingSystem instance returned");
            return Err(CollectorError::EmptyClass);
        }
    };
    Ok(os)
}
