pub mod collectors;
pub mod core;
pub mod document;
mod error;
mod filesystem;
#[cfg(target_os = "windows")]
mod management;
pub mod output;
pub mod structs;
mod utils;

pub use error::InventoryError;
