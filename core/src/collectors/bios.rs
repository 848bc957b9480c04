use crate::document::BiosInfo;
use serde::Deserialize;

#[cfg(target_os = "windows")]
use super::error::CollectorError;
#[cfg(target_os = "windows")]
use crate::management::Management;
#[cfg(target_os = "windows")]
use log::error;

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_BIOS")]
pub struct BiosRow {
    #[serde(rename = "Manufacturer")]
    pub manufacturer: Option<String>,
    #[serde(rename = "SerialNumber")]
    pub serial_number: Option<String>,
    #[serde(rename = "SMBIOSBIOSVersion")]
    pub smbios_version: Option<String>,
}

/// Project the firmware instance into report fields. The SMBIOS version is
/// re-exposed as BiosVersion
pub fn project_bios(rows: Vec<BiosRow>) -> Option<BiosInfo> {
    rows.into_iter().next().map(|row| BiosInfo {
        manufacturer: row.manufacturer.unwrap_or_default(),
        serial_number: row.serial_number.unwrap_or_default(),
        bios_version: row.smbios_version.unwrap_or_default(),
    })
}

#[cfg(target_os = "windows")]
/// Get the firmware identity for the host
pub(crate) fn collect(interface: &Management) -> Result<BiosInfo, CollectorError> {
    let rows: Vec<BiosRow> = interface.query()?;
    let bios = match project_bios(rows) {
        Some(result) => result,
        None => {
            error!("[hostinv-core] No Win32_BIOS instance returned");
            return Err(CollectorError::EmptyClass);
        }
    };
    Ok(bios)
}

#[cfg(test)]
mod tests {
    use super::{project_bios, BiosRow};

    #[test]
    fn test_project_bios() {
        let rows = vec![BiosRow {
            manufacturer: Some(String::from("LENOVO")),
            serial_number: Some(String::from("PF3XYZ01")),
            smbios_version: Some(String::from("R1MET57W (1.27)")),
        }];

        let result = project_bios(rows).unwrap();
        assert_eq!(result.manufacturer, "LENOVO");
        assert_eq!(result.serial_number, "PF3XYZ01");
        assert_eq!(result.bios_version, "R1MET57W (1.27)");
    }

    #[test]
    fn test_project_bios_no_rows() {
        assert!(project_bios(Vec::new()).is_none());
    }
}
