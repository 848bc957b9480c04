use crate::document::VideoControllerInfo;
use crate::utils::{time::cim_datetime_to_rfc3339, units::bytes_to_gb_rounded};
use serde::Deserialize;

#[cfg(target_os = "windows")]
use super::error::CollectorError;
#[cfg(target_os = "windows")]
use crate::management::Management;

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_VideoController")]
pub struct VideoControllerRow {
    #[serde(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "AdapterRAM")]
    pub adapter_ram: Option<u64>,
    #[serde(rename = "DriverDate")]
    pub driver_date: Option<String>,
    #[serde(rename = "DriverVersion")]
    pub driver_version: Option<String>,
    #[serde(rename = "VideoModeDescription")]
    pub video_mode_description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_DesktopMonitor")]
pub struct MonitorRow {
    #[serde(rename = "DeviceID")]
    pub device_id: Option<String>,
}

/// Project display adapters into report fields. The model comes from the
/// adapter description and RAM is rounded to one decimal place
pub fn project_video(rows: Vec<VideoControllerRow>) -> Vec<VideoControllerInfo> {
    let mut controllers = Vec::new();
    for row in rows {
        controllers.push(VideoControllerInfo {
            status: row.status.unwrap_or_default(),
            model: row.description.unwrap_or_default(),
            adapter_ram_gb: bytes_to_gb_rounded(row.adapter_ram.unwrap_or(0)),
            driver_date: cim_datetime_to_rfc3339(&row.driver_date.unwrap_or_default()),
            driver_version: row.driver_version.unwrap_or_default(),
            video_mode_description: row.video_mode_description.unwrap_or_default(),
        });
    }
    controllers
}

/// Count attached desktop monitors
pub fn count_monitors(rows: &[MonitorRow]) -> u32 {
    rows.len() as u32
}

#[cfg(target_os = "windows")]
/// Get display adapters
pub(crate) fn collect(interface: &Management) -> Result<Vec<VideoControllerInfo>, CollectorError> {
    let rows: Vec<VideoControllerRow> = interface.query()?;
    Ok(project_video(rows))
}

#[cfg(target_os = "windows")]
/// Get the attached monitor count
pub(crate) fn collect_monitor_count(interface: &Management) -> Result<u32, CollectorError> {
    let rows: Vec<MonitorRow> = interface.query()?;
    Ok(count_monitors(&rows))
}

#[cfg(test)]
mod tests {
    use super::{count_monitors, project_video, MonitorRow, VideoControllerRow};

    #[test]
    fn test_project_video() {
        let rows = vec![VideoControllerRow {
            status: Some(String::from("OK")),
            description: Some(String::from("Intel(R) Iris(R) Xe Graphics")),
            adapter_ram: Some(1073741824),
            driver_date: Some(String::from("20231120000000.000000-000")),
            driver_version: Some(String::from("31.0.101.4972")),
            video_mode_description: Some(String::from("1920 x 1080 x 4294967296 colors")),
        }];

        let result = project_video(rows);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].model, "Intel(R) Iris(R) Xe Graphics");
        assert_eq!(result[0].adapter_ram_gb, 1.0);
        assert_eq!(result[0].driver_date, "2023-11-20T00:00:00+00:00");
    }

    #[test]
    fn test_count_monitors() {
        let rows = vec![
            MonitorRow {
                device_id: Some(String::from("DesktopMonitor1")),
            },
            MonitorRow {
                device_id: Some(String::from("DesktopMonitor2")),
            },
        ];

        assert_eq!(count_monitors(&rows), 2);
        assert_eq!(count_monitors(&[]), 0);
    }
}
