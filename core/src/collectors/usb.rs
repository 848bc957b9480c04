use crate::document::UsbDeviceEntry;
use serde::Deserialize;

#[cfg(target_os = "windows")]
use super::error::CollectorError;
#[cfg(target_os = "windows")]
use crate::management::Management;

const USB_CLASS: &str = "USB";

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_PnPEntity")]
pub struct PnpEntityRow {
    #[serde(rename = "PNPClass")]
    pub pnp_class: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "PNPDeviceID")]
    pub pnp_device_id: Option<String>,
    #[serde(rename = "Present")]
    pub present: Option<bool>,
}

/// Project plug-and-play entities into report fields, keeping USB-class
/// devices that are currently present
pub fn project_usb_devices(rows: Vec<PnpEntityRow>) -> Vec<UsbDeviceEntry> {
    let mut devices = Vec::new();
    for row in rows {
        if row.present != Some(true) || row.pnp_class.as_deref() != Some(USB_CLASS) {
            continue;
        }
        devices.push(UsbDeviceEntry {
            class: row.pnp_class.unwrap_or_default(),
            status: row.status.unwrap_or_default(),
            friendly_name: row.name.unwrap_or_default(),
            instance_id: row.pnp_device_id.unwrap_or_default(),
        });
    }
    devices
}

#[cfg(target_os = "windows")]
/// Get present USB devices
pub(crate) fn collect(interface: &Management) -> Result<Vec<UsbDeviceEntry>, CollectorError> {
    let rows: Vec<PnpEntityRow> = interface.query()?;
    Ok(project_usb_devices(rows))
}
