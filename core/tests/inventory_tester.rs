use hostinv_core::collectors::error::CollectorError;
use hostinv_core::collectors::network::{enrich_adapters, NetAdapterRow, NetConfigRow};
use hostinv_core::collectors::profiles::last_touched;
use hostinv_core::collectors::software::products_or_empty;
use hostinv_core::document::{
    BiosInfo, BootConfiguration, DiskDrive, HotfixEntry, InventoryDocument, InventorySections,
    LogicalDisk, MemoryModule, OperatingSystemInfo, Printer, ProcessorInfo, RunMetadata,
    SystemIdentity, TimeZoneInfo, UsbDeviceEntry, UserProfileEntry, VideoControllerInfo,
};
use hostinv_core::output::write_document;
use std::fs::read_to_string;

fn sections_fixture() -> InventorySections {
    let metadata = vec![NetAdapterRow {
        name: Some(String::from("Ethernet")),
        interface_index: Some(12),
        mac_address: Some(String::from("00-15-5D-01-02-03")),
        media_connect_state: Some(1),
        speed: Some(1000000000),
    }];
    let configs = vec![NetConfigRow {
        description: Some(String::from("Intel(R) Ethernet Connection I219-LM")),
        mac_address: Some(String::from("00:15:5D:01:02:03")),
        ip_enabled: Some(true),
        dhcp_enabled: Some(true),
        dhcp_server: Some(String::from("192.168.1.1")),
        ip_addresses: Some(vec![String::from("192.168.1.20")]),
        subnets: Some(vec![String::from("255.255.255.0")]),
        gateways: Some(vec![String::from("192.168.1.1")]),
        dns_domain: Some(String::from("corp.example.com")),
        dns_servers: Some(vec![String::from("192.168.1.2")]),
    }];

    let user_profiles = vec![
        UserProfileEntry {
            name: String::from("alice"),
            last_write: 1706780000,
            path: String::from("C:\\Users\\alice"),
        },
        UserProfileEntry {
            name: String::from("Public"),
            last_write: 1600000000,
            path: String::from("C:\\Users\\Public"),
        },
    ];
    let last_user_folder_touched = last_touched(&user_profiles);

    InventorySections {
        general: SystemIdentity {
            model: String::from("Latitude 5440"),
            manufacturer: String::from("Dell Inc."),
            owner: String::from("IT"),
            system_type: String::from("x64-based PC"),
        },
        boot_configuration: BootConfiguration {
            name: String::from("\\Device\\Harddisk0\\Partition2"),
            install_path: String::from("C:\\WINDOWS"),
        },
        bios: BiosInfo {
            manufacturer: String::from("Dell Inc."),
            serial_number: String::from("ABC1234"),
            bios_version: String::from("1.14.0"),
        },
        operating_system: OperatingSystemInfo {
            caption: String::from("Microsoft Windows 11 Pro"),
            build_number: String::from("22631"),
            version: String::from("10.0.22631"),
            serial_number: String::from("00330-80000-00000-AA000"),
            install_date: String::from("2023-06-01T12:00:00+01:00"),
            last_boot_time: String::from("2024-01-30T07:45:00+01:00"),
            architecture: String::from("64-bit"),
        },
        time_zone: TimeZoneInfo {
            bias: 60,
            caption: String::from("(UTC+01:00) Amsterdam, Berlin"),
            standard_name: String::from("W. Europe Standard Time"),
        },
        logical_disks: vec![LogicalDisk {
            device_id: String::from("C:"),
            size_gb: 476,
            free_gb: 123,
        }],
        disk_drives: vec![DiskDrive {
            system_name: String::from("INV-TEST-01"),
            model: String::from("NVMe PM9A1 NVMe Samsung 512GB"),
            size_gb: 476,
            interface_type: String::from("SCSI"),
            serial_number: String::from("0025_38B1_2C00_1234"),
        }],
        processor: vec![ProcessorInfo {
            name: String::from("13th Gen Intel(R) Core(TM) i7-1365U"),
            manufacturer: String::from("GenuineIntel"),
            max_clock_speed: 1800,
            number_of_cores: 10,
            number_of_logical_processors: 12,
            status: String::from("OK"),
        }],
        physical_memory: vec![MemoryModule {
            part_number: String::from("HMCG78AGBSA092N"),
            tag: String::from("Physical Memory 0"),
            serial_number: String::from("12345678"),
            manufacturer: String::from("Hynix"),
            clock_speed: 3200,
            voltage: 1200,
            capacity_gb: 16.0,
            bank_label: String::from("BANK 0"),
            device_locator: String::from("DIMM A"),
        }],
        network_adapters: enrich_adapters(metadata, configs),
        printers: vec![Printer {
            name: String::from("Microsoft Print to PDF"),
            driver: String::from("Microsoft Print To PDF"),
            state: 0,
            status: 3,
            location: String::new(),
            port: String::from("PORTPROMPT:"),
            network: false,
            shared: false,
            offline: false,
        }],
        user_profiles,
        hotfixes: vec![HotfixEntry {
            hotfix_id: String::from("KB5034123"),
            description: String::from("Security Update"),
            installed_on: String::from("1/10/2024"),
            installed_by: String::from("NT AUTHORITY\\SYSTEM"),
        }],
        video_controllers: vec![VideoControllerInfo {
            status: String::from("OK"),
            model: String::from("Intel(R) Iris(R) Xe Graphics"),
            adapter_ram_gb: 1.0,
            driver_date: String::from("2023-11-20T00:00:00+00:00"),
            driver_version: String::from("31.0.101.4972"),
            video_mode_description: String::from("1920 x 1080 x 4294967296 colors"),
        }],
        monitor_count: 2,
        usb_devices: vec![UsbDeviceEntry {
            class: String::from("USB"),
            status: String::from("OK"),
            friendly_name: String::from("USB Composite Device"),
            instance_id: String::from("USB\\VID_046D&PID_C52B\\5&2A7D4F3&0&2"),
        }],
        last_user_folder_touched,
        // No include-software flag on this run
        installed_products: products_or_empty(Err(CollectorError::Query)),
    }
}

fn metadata_fixture() -> RunMetadata {
    RunMetadata {
        computer: String::from("INV-TEST-01"),
        operator: String::from("svc-inventory"),
        generated_at: String::from("2024-02-01T09:00:00Z"),
    }
}

#[test]
fn test_assemble_and_write_document() {
    let document = InventoryDocument::assemble(&metadata_fixture(), sections_fixture());
    write_document(&document, "./tmp/inventory_tester").unwrap();

    let data = read_to_string("./tmp/inventory_tester/INV-TEST-01.json").unwrap();
    let value: serde_json::Value = serde_json::from_str(&data).unwrap();

    let keys = [
        "Computer",
        "ReportVersion",
        "GeneratedAt",
        "GeneratedBy",
        "General",
        "BootConfiguration",
        "BIOS",
        "OperatingSystem",
        "TimeZone",
        "LogicalDisks",
        "DiskDrives",
        "Processor",
        "PhysicalMemory",
        "NetworkAdapters",
        "Printers",
        "UserProfiles",
        "Hotfixes",
        "VideoControllers",
        "MonitorCount",
        "USBDevices",
        "LastUserFolderTouched",
        "InstalledProducts",
    ];
    let object = value.as_object().unwrap();
    for key in keys {
        assert!(object.contains_key(key), "missing key {key}");
    }
    assert_eq!(object.len(), keys.len());

    assert_eq!(value["Computer"], "INV-TEST-01");
    assert_eq!(value["ReportVersion"], "1.2.0");
    assert_eq!(value["GeneratedBy"], "svc-inventory");
    assert_eq!(value["MonitorCount"], 2);
    assert_eq!(value["LastUserFolderTouched"], "alice");
    assert_eq!(value["InstalledProducts"].as_array().unwrap().len(), 0);

    let adapters = value["NetworkAdapters"].as_array().unwrap();
    assert_eq!(adapters.len(), 1);
    assert_eq!(adapters[0]["Name"], "Ethernet");
    assert_eq!(adapters[0]["MACAddress"], "00:15:5D:01:02:03");
    assert_eq!(adapters[0]["IPAddresses"], "192.168.1.20");
    assert_eq!(adapters[0]["DHCPEnabled"], true);

    assert_eq!(value["LogicalDisks"][0]["DeviceID"], "C:");
    assert_eq!(value["LogicalDisks"][0]["SizeGB"], 476);
    assert_eq!(value["BIOS"]["BiosVersion"], "1.14.0");
    assert_eq!(value["USBDevices"][0]["FriendlyName"], "USB Composite Device");
    assert_eq!(value["Hotfixes"][0]["HotfixID"], "KB5034123");
}

#[test]
fn test_document_round_trip() {
    let document = InventoryDocument::assemble(&metadata_fixture(), sections_fixture());

    let serialized = serde_json::to_string(&document).unwrap();
    let parsed: InventoryDocument = serde_json::from_str(&serialized).unwrap();
    assert_eq!(parsed.computer, document.computer);
    assert_eq!(parsed.report_version, document.report_version);
    assert_eq!(parsed.network_adapters.len(), 1);
    assert_eq!(
        parsed.network_adapters[0].link_speed,
        Some(1000000000)
    );
    assert_eq!(parsed.physical_memory[0].capacity_gb, 16.0);
    assert_eq!(
        parsed.last_user_folder_touched.as_deref(),
        Some("alice")
    );
}
