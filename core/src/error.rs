use crate::collectors::error::CollectorError;
use crate::output::error::OutputError;
use std::fmt;

#[derive(Debug)]
pub enum InventoryError {
    Interface,
    Collector,
    Output,
    UnsupportedPlatform,
}

impl From<CollectorError> for InventoryError {
    fn from(_err: CollectorError) -> Self {
        InventoryError::Collector
    }
}

impl From<OutputError> for InventoryError {
    fn from(_err: OutputError) -> Self {
        InventoryError::Output
    }
}

impl std::error::Error for InventoryError {}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::Interface => {
                write!(f, "Failed to connect to the management interface")
            }
            InventoryError::Collector => {
                write!(f, "Failed to query a required inventory source")
            }
            InventoryError::Output => write!(f, "Failed to write inventory document"),
            InventoryError::UnsupportedPlatform => {
                write!(f, "Inventory collection is only supported on Windows")
            }
        }
    }
}
