use crate::document::{BootConfiguration, SystemIdentity};
use serde::Deserialize;

#[cfg(target_os = "windows")]
use super::error::CollectorError;
#[cfg(target_os = "windows")]
use crate::management::Management;
#[cfg(target_os = "windows")]
use log::error;

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_ComputerSystem")]
pub struct ComputerSystemRow {
    #[serde(rename = "Model")]
    pub model: Option<String>,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: Option<String>,
    #[serde(rename = "PrimaryOwnerName")]
    pub primary_owner_name: Option<String>,
    #[serde(rename = "SystemType")]
    pub system_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_BootConfiguration")]
pub struct BootConfigurationRow {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "ConfigurationPath")]
    pub configuration_path: Option<String>,
}

/// Project the computer system instance into the General section
pub fn project_system(rows: Vec<ComputerSystemRow>) -> Option<SystemIdentity> {
    rows.into_iter().next().map(|row| SystemIdentity {
        model: row.model.unwrap_or_default(),
        manufacturer: row.manufacturer.unwrap_or_default(),
        owner: row.primary_owner_name.unwrap_or_default(),
        system_type: row.system_type.unwrap_or_default(),
    })
}

/// Project the boot configuration instance into report fields
pub fn project_boot(rows: Vec<BootConfigurationRow>) -> Option<BootConfiguration> {
    rows.into_iter().next().map(|row| BootConfiguration {
        name: row.name.unwrap_or_default(),
        install_path: row.configuration_path.unwrap_or_default(),
    })
}

#[cfg(target_os = "windows")]
/// Get machine model, manufacturer, owner, and system type
pub(crate) fn collect_system(interface: &Management) -> Result<SystemIdentity, CollectorError> {
    let rows: Vec<ComputerSystemRow> = interface.query()?;
    let identity = match project_system(rows) {
        Some(result) => result,
        None => {
            error!("[hostinv-core] No Win32_ComputerSystem instance returned");
            return Err(CollectorError::EmptyClass);
        }
    };
    Ok(identity)
}

#[cfg(target_os = "windows")]
/// Get the boot configuration for the host
pub(crate) fn collect_boot(interface: &Management) -> Result<BootConfiguration, CollectorError> {
    let rows: Vec<BootConfigurationRow> = interface.query()?;
    let boot = match project_boot(rows) {
        Some(result) => result,
        None => {
            error!("[hostinv-core] No Win32_BootConfiguration instance returned");
            return Err(CollectorError::EmptyClass);
        }
    };
    Ok(boot)
}
