use crate::document::InventoryDocument;
use error::OutputError;
use log::error;
use std::fs::{create_dir_all, File};
use std::io::Write;

pub mod error;

/// Serialize the document and write it to `<directory>/<Computer>.json`.
/// An existing snapshot for the same host is replaced
pub fn write_document(document: &InventoryDocument, directory: &str) -> Result<(), OutputError> {
    let serialized_result = serde_json::to_string_pretty(document);
    let serialized = match serialized_result {
        Ok(results) => results,
        Err(err) => {
            error!("[hostinv-core] Could not serialize inventory document: {err:?}");
            return Err(OutputError::Serialize);
        }
    };

    if let Err(err) = create_dir_all(directory) {
        error!("[hostinv-core] Could not create output directory {directory}: {err:?}");
        return Err(OutputError::CreateDirectory);
    }

    let path = format!("{directory}/{}.json", document.computer);
    let file_result = File::create(&path);
    let mut file = match file_result {
        Ok(results) => results,
        Err(err) => {
            error!("[hostinv-core] Could not create output file {path}: {err:?}");
            return Err(OutputError::CreateFile);
        }
    };

    if let Err(err) = file.write_all(serialized.as_bytes()) {
        error!("[hostinv-core] Could not write output file {path}: {err:?}");
        return Err(OutputError::WriteFile);
    }

    Ok(())
}
