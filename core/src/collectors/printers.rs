use crate::document::Printer;
use serde::Deserialize;

#[cfg(target_os = "windows")]
use super::error::CollectorError;
#[cfg(target_os = "windows")]
use crate::management::Management;

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_Printer")]
pub struct PrinterRow {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "DriverName")]
    pub driver_name: Option<String>,
    #[serde(rename = "PrinterState")]
    pub printer_state: Option<u32>,
    #[serde(rename = "PrinterStatus")]
    pub printer_status: Option<u32>,
    #[serde(rename = "Location")]
    pub location: Option<String>,
    #[serde(rename = "PortName")]
    pub port_name: Option<String>,
    #[serde(rename = "Network")]
    pub network: Option<bool>,
    #[serde(rename = "Shared")]
    pub shared: Option<bool>,
    #[serde(rename = "WorkOffline")]
    pub work_offline: Option<bool>,
}

/// Project configured printers (physical and logical) into report fields
pub fn project_printers(rows: Vec<PrinterRow>) -> Vec<Printer> {
    let mut printers = Vec::new();
    for row in rows {
        printers.push(Printer {
            name: row.name.unwrap_or_default(),
            driver: row.driver_name.unwrap_or_default(),
            state: row.printer_state.unwrap_or(0),
            status: row.printer_status.unwrap_or(0),
            location: row.location.unwrap_or_default(),
            port: row.port_name.unwrap_or_default(),
            network: row.network.unwrap_or(false),
            shared: row.shared.unwrap_or(false),
            offline: row.work_offline.unwrap_or(false),
        });
    }
    printers
}

#[cfg(target_os = "windows")]
/// Get configured printers
pub(crate) fn collect(interface: &Management) -> Result<Vec<Printer>, CollectorError> {
    let rows: Vec<PrinterRow> = interface.query()?;
    Ok(project_printers(rows))
}
