use crate::document::HotfixEntry;
use serde::Deserialize;

#[cfg(target_os = "windows")]
use super::error::CollectorError;
#[cfg(target_os = "windows")]
use crate::management::Management;

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_QuickFixEngineering")]
pub struct HotfixRow {
    #[serde(rename = "HotFixID")]
    pub hotfix_id: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    // Free-form date string, not CIM_DATETIME
    #[serde(rename = "InstalledOn")]
    pub installed_on: Option<String>,
    #[serde(rename = "InstalledBy")]
    pub installed_by: Option<String>,
}

/// Project applied OS patches into report fields
pub fn project_hotfixes(rows: Vec<HotfixRow>) -> Vec<HotfixEntry> {
    let mut hotfixes = Vec::new();
    for row in rows {
        hotfixes.push(HotfixEntry {
            hotfix_id: row.hotfix_id.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            installed_on: row.installed_on.unwrap_or_default(),
            installed_by: row.installed_by.unwrap_or_default(),
        });
    }
    hotfixes
}

#[cfg(target_os = "windows")]
/// Get applied OS patches
pub(crate) fn collect(interface: &Management) -> Result<Vec<HotfixEntry>, CollectorError> {
    let rows: Vec<HotfixRow> = interface.query()?;
    Ok(project_hotfixes(rows))
}
