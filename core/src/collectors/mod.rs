pub mod bios;
pub mod disks;
pub mod error;
pub mod hotfixes;
pub mod memory;
pub mod network;
pub mod os;
pub mod printers;
pub mod processor;
pub mod profiles;
pub mod software;
pub mod system;
pub mod timezone;
pub mod usb;
pub mod video;
