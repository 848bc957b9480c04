use crate::document::{DiskDrive, LogicalDisk};
use crate::utils::units::bytes_to_gb;
use serde::Deserialize;

#[cfg(target_os = "windows")]
use super::error::CollectorError;
#[cfg(target_os = "windows")]
use crate::management::Management;

// DriveType 3 is a local fixed disk
const FIXED_DRIVE_TYPE: u32 = 3;
const FIXED_MEDIA: &str = "Fixed hard disk media";

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_LogicalDisk")]
pub struct LogicalDiskRow {
    #[serde(rename = "DeviceID")]
    pub device_id: Option<String>,
    #[serde(rename = "DriveType")]
    pub drive_type: Option<u32>,
    #[serde(rename = "Size")]
    pub size: Option<u64>,
    #[serde(rename = "FreeSpace")]
    pub free_space: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_DiskDrive")]
pub struct DiskDriveRow {
    #[serde(rename = "SystemName")]
    pub system_name: Option<String>,
    #[serde(rename = "Model")]
    pub model: Option<String>,
    #[serde(rename = "Size")]
    pub size: Option<u64>,
    #[serde(rename = "InterfaceType")]
    pub interface_type: Option<String>,
    #[serde(rename = "SerialNumber")]
    pub serial_number: Option<String>,
    #[serde(rename = "MediaType")]
    pub media_type: Option<String>,
}

/// Project mounted volumes into report fields, keeping fixed drives only.
/// Sizes are truncated to whole gigabytes
pub fn project_logical_disks(rows: Vec<LogicalDiskRow>) -> Vec<LogicalDisk> {
    let mut disks = Vec::new();
    for row in rows {
        if row.drive_type != Some(FIXED_DRIVE_TYPE) {
            continue;
        }
        disks.push(LogicalDisk {
            device_id: row.device_id.unwrap_or_default(),
            size_gb: bytes_to_gb(row.size.unwrap_or(0)),
            free_gb: bytes_to_gb(row.free_space.unwrap_or(0)),
        });
    }
    disks
}

/// Project physical drives into report fields, keeping fixed hard-disk media only
pub fn project_disk_drives(rows: Vec<DiskDriveRow>) -> Vec<DiskDrive> {
    let mut drives = Vec::new();
    for row in rows {
        if row.media_type.as_deref() != Some(FIXED_MEDIA) {
            continue;
        }
        drives.push(DiskDrive {
            system_name: row.system_name.unwrap_or_default(),
            model: row.model.unwrap_or_default(),
            size_gb: bytes_to_gb(row.size.unwrap_or(0)),
            interface_type: row.interface_type.unwrap_or_default(),
            serial_number: row.serial_number.unwrap_or_default(),
        });
    }
    drives
}

#[cfg(target_os = "windows")]
/// Get fixed-type mounted volumes
pub(crate) fn collect_logical(interface: &Management) -> Result<Vec<LogicalDisk>, CollectorError> {
    let rows: Vec<LogicalDiskRow> = interface.query()?;
    Ok(project_logical_disks(rows))
}

#[cfg(target_os = "windows")]
/// Get fixed physical disk drives
pub(crate) fn collect_drives(interface: &Management) -> Result<Vec<DiskDrive>, CollectorError> {
    let rows: Vec<DiskDriveRow> = interface.query()?;
    Ok(project_disk_drives(rows))
}
