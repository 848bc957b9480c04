use crate::document::RunMetadata;
use crate::error::InventoryError;
use crate::structs::options::CollectionOptions;
use crate::utils::logging::create_log_file;
use log::error;
use simplelog::{Config, WriteLogger};

#[cfg(target_os = "windows")]
use crate::collectors::{
    bios, disks, hotfixes, memory, network, os, printers, processor, profiles, software, system,
    timezone, usb, video,
};
#[cfg(target_os = "windows")]
use crate::document::{InventoryDocument, InventorySections};
#[cfg(target_os = "windows")]
use crate::management::Management;
#[cfg(target_os = "windows")]
use crate::output::write_document;

/// Run the full inventory collection and write one snapshot document to the
/// output directory
pub fn collect_inventory(options: &CollectionOptions) -> Result<(), InventoryError> {
    let log_result = create_log_file(options);
    if let Ok((log_file, level)) = log_result {
        // Ignore the result in case logging was already initialized
        let _ = WriteLogger::init(level, Config::default(), log_file);
    }

    let metadata = RunMetadata::capture();
    run(options, &metadata)
}

#[cfg(target_os = "windows")]
fn run(options: &CollectionOptions, metadata: &RunMetadata) -> Result<(), InventoryError> {
    let interface_result = Management::connect();
    let interface = match interface_result {
        Ok(results) => results,
        Err(err) => {
            error!("[hostinv-core] Could not open management interface: {err:?}");
            return Err(InventoryError::Interface);
        }
    };

    println!("[hostinv] Collecting system and boot configuration");
    let general = system::collect_system(&interface)?;
    let boot_configuration = system::collect_boot(&interface)?;

    println!("[hostinv] Collecting BIOS and operating system");
    let bios = bios::collect(&interface)?;
    let operating_system = os::collect(&interface)?;
    let time_zone = timezone::collect(&interface)?;

    println!("[hostinv] Collecting storage");
    let logical_disks = disks::collect_logical(&interface)?;
    let disk_drives = disks::collect_drives(&interface)?;

    println!("[hostinv] Collecting processor and memory");
    let processor = processor::collect(&interface)?;
    let physical_memory = memory::collect(&interface)?;

    println!("[hostinv] Collecting network adapters");
    let network_adapters = network::collect(&interface)?;

    println!("[hostinv] Collecting peripherals");
    let printers = printers::collect(&interface)?;
    let video_controllers = video::collect(&interface)?;
    let monitor_count = video::collect_monitor_count(&interface)?;
    let usb_devices = usb::collect(&interface)?;

    println!("[hostinv] Collecting patches and user profiles");
    let hotfixes = hotfixes::collect(&interface)?;
    let user_profiles = profiles::collect_profiles(&profiles::users_root());
    let last_user_folder_touched = profiles::last_touched(&user_profiles);

    let installed_products = if options.include_software {
        println!("[hostinv] Collecting installed software, this may take a while");
        let products_result = software::collect(&interface);
        if products_result.is_err() {
            println!("[hostinv] Installed software enumeration failed, continuing without it");
        }
        software::products_or_empty(products_result)
    } else {
        Vec::new()
    };

    let sections = InventorySections {
        general,
        boot_configuration,
        bios,
        operating_system,
        time_zone,
        logical_disks,
        disk_drives,
        processor,
        physical_memory,
        network_adapters,
        printers,
        user_profiles,
        hotfixes,
        video_controllers,
        monitor_count,
        usb_devices,
        last_user_folder_touched,
        installed_products,
    };

    let document = InventoryDocument::assemble(metadata, sections);
    write_document(&document, &options.directory)?;
    println!(
        "[hostinv] Wrote {}/{}.json",
        options.directory, document.computer
    );
    Ok(())
}

#[cfg(not(target_os = "windows"))]
fn run(_options: &CollectionOptions, _metadata: &RunMetadata) -> Result<(), InventoryError> {
    error!("[hostinv-core] Inventory collection is only supported on Windows");
    Err(InventoryError::UnsupportedPlatform)
}
