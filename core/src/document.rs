use crate::utils::{environment::get_env_value, time::rfc3339_now};
use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Report format version written into every snapshot
pub const REPORT_VERSION: &str = "1.2.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SystemIdentity {
    pub model: String,
    pub manufacturer: String,
    pub owner: String,
    pub system_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BootConfiguration {
    pub name: String,
    pub install_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BiosInfo {
    pub manufacturer: String,
    pub serial_number: String,
    pub bios_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OperatingSystemInfo {
    pub caption: String,
    pub build_number: String,
    pub version: String,
    pub serial_number: String,
    pub install_date: String,
    pub last_boot_time: String,
    pub architecture: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeZoneInfo {
    pub bias: i32,
    pub caption: String,
    pub standard_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogicalDisk {
    #[serde(rename = "DeviceID")]
    pub device_id: String,
    #[serde(rename = "SizeGB")]
    pub size_gb: u64,
    #[serde(rename = "FreeGB")]
    pub free_gb: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiskDrive {
    pub system_name: String,
    pub model: String,
    #[serde(rename = "SizeGB")]
    pub size_gb: u64,
    pub interface_type: String,
    pub serial_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProcessorInfo {
    pub name: String,
    pub manufacturer: String,
    pub max_clock_speed: u32,
    pub number_of_cores: u32,
    pub number_of_logical_processors: u32,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MemoryModule {
    pub part_number: String,
    pub tag: String,
    pub serial_number: String,
    pub manufacturer: String,
    pub clock_speed: u32,
    pub voltage: u32,
    #[serde(rename = "CapacityGB")]
    pub capacity_gb: f64,
    pub bank_label: String,
    pub device_locator: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkAdapter {
    /// Friendly adapter name resolved from the adapter-metadata set
    pub name: Option<String>,
    pub description: String,
    pub interface_index: Option<u32>,
    pub status: Option<String>,
    pub link_speed: Option<u64>,
    #[serde(rename = "DHCPEnabled")]
    pub dhcp_enabled: bool,
    #[serde(rename = "DHCPServer")]
    pub dhcp_server: String,
    #[serde(rename = "IPAddresses")]
    pub ip_addresses: String,
    pub subnets: String,
    pub gateways: String,
    #[serde(rename = "DNSDomain")]
    pub dns_domain: String,
    #[serde(rename = "DNSServers")]
    pub dns_servers: String,
    #[serde(rename = "MACAddress")]
    pub mac_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Printer {
    pub name: String,
    pub driver: String,
    pub state: u32,
    pub status: u32,
    pub location: String,
    pub port: String,
    pub network: bool,
    pub shared: bool,
    pub offline: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserProfileEntry {
    pub name: String,
    /// Seconds since UNIX-EPOCH
    pub last_write: i64,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HotfixEntry {
    #[serde(rename = "HotfixID")]
    pub hotfix_id: String,
    pub description: String,
    pub installed_on: String,
    pub installed_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VideoControllerInfo {
    pub status: String,
    pub model: String,
    #[serde(rename = "AdapterRamGB")]
    pub adapter_ram_gb: f64,
    pub driver_date: String,
    pub driver_version: String,
    pub video_mode_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UsbDeviceEntry {
    pub class: String,
    pub status: String,
    pub friendly_name: String,
    pub instance_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstalledProductEntry {
    pub vendor: String,
    pub name: String,
    pub version: String,
    pub identifying_number: String,
    pub install_date: String,
}

/// Identity of one collection run, captured once at the start
#[derive(Debug, Clone)]
pub struct RunMetadata {
    pub computer: String,
    pub operator: String,
    pub generated_at: String,
}

impl RunMetadata {
    /// Resolve machine name and operator identity from the invoking session
    pub fn capture() -> RunMetadata {
        let mut computer = System::host_name().unwrap_or_default();
        if computer.is_empty() {
            computer = get_env_value("COMPUTERNAME");
        }
        if computer.is_empty() {
            computer = String::from("unknown-host");
        }

        #[cfg(target_os = "windows")]
        let operator = get_env_value("USERNAME");
        #[cfg(target_family = "unix")]
        let operator = get_env_value("USER");

        RunMetadata {
            computer,
            operator,
            generated_at: rfc3339_now(),
        }
    }
}

/// All collector outputs for one run
#[derive(Debug)]
pub struct InventorySections {
    pub general: SystemIdentity,
    pub boot_configuration: BootConfiguration,
    pub bios: BiosInfo,
    pub operating_system: OperatingSystemInfo,
    pub time_zone: TimeZoneInfo,
    pub logical_disks: Vec<LogicalDisk>,
    pub disk_drives: Vec<DiskDrive>,
    pub processor: Vec<ProcessorInfo>,
    pub physical_memory: Vec<MemoryModule>,
    pub network_adapters: Vec<NetworkAdapter>,
    pub printers: Vec<Printer>,
    pub user_profiles: Vec<UserProfileEntry>,
    pub hotfixes: Vec<HotfixEntry>,
    pub video_controllers: Vec<VideoControllerInfo>,
    pub monitor_count: u32,
    pub usb_devices: Vec<UsbDeviceEntry>,
    pub last_user_folder_touched: Option<String>,
    pub installed_products: Vec<InstalledProductEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InventoryDocument {
    pub computer: String,
    pub report_version: String,
    pub generated_at: String,
    pub generated_by: String,
    pub general: SystemIdentity,
    pub boot_configuration: BootConfiguration,
    #[serde(rename = "BIOS")]
    pub bios: BiosInfo,
    pub operating_system: OperatingSystemInfo,
    pub time_zone: TimeZoneInfo,
    pub logical_disks: Vec<LogicalDisk>,
    pub disk_drives: Vec<DiskDrive>,
    pub processor: Vec<ProcessorInfo>,
    pub physical_memory: Vec<MemoryModule>,
    pub network_adapters: Vec<NetworkAdapter>,
    pub printers: Vec<Printer>,
    pub user_profiles: Vec<UserProfileEntry>,
    pub hotfixes: Vec<HotfixEntry>,
    pub video_controllers: Vec<VideoControllerInfo>,
    pub monitor_count: u32,
    #[serde(rename = "USBDevices")]
    pub usb_devices: Vec<UsbDeviceEntry>,
    pub last_user_folder_touched: Option<String>,
    pub installed_products: Vec<InstalledProductEntry>,
}

impl InventoryDocument {
    /// Combine collector outputs and run metadata into the root document.
    /// Pure assembly, no cross-section validation
    pub fn assemble(metadata: &RunMetadata, sections: InventorySections) -> InventoryDocument {
        InventoryDocument {
            computer: metadata.computer.clone(),
            report_version: REPORT_VERSION.to_string(),
            generated_at: metadata.generated_at.clone(),
            generated_by: metadata.operator.clone(),
            general: sections.general,
            boot_configuration: sections.boot_configuration,
            bios: sections.bios,
            operating_system: sections.operating_system,
            time_zone: sections.time_zone,
            logical_disks: sections.logical_disks,
            disk_drives: sections.disk_drives,
            processor: sections.processor,
            physical_memory: sections.physical_memory,
            network_adapters: sections.network_adapters,
            printers: sections.printers,
            user_profiles: sections.user_profiles,
            hotfixes: sections.hotfixes,
            video_controllers: sections.video_controllers,
            monitor_count: sections.monitor_count,
            usb_devices: sections.usb_devices,
            last_user_folder_touched: sections.last_user_folder_touched,
            installed_products: sections.installed_products,
        }
    }
}
