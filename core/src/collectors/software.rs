use super::error::CollectorError;
use crate::document::InstalledProductEntry;
use log::warn;
use serde::Deserialize;

#[cfg(target_os = "windows")]
use crate::management::Management;

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_Product")]
pub struct ProductRow {
    #[serde(rename = "Vendor")]
    pub vendor: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Version")]
    pub version: Option<String>,
    #[serde(rename = "IdentifyingNumber")]
    pub identifying_number: Option<String>,
    #[serde(rename = "InstallDate")]
    pub install_date: Option<String>,
}

/// Project MSI-registered products into report fields
pub fn project_products(rows: Vec<ProductRow>) -> Vec<InstalledProductEntry> {
    let mut products = Vec::new();
    for row in rows {
        products.push(InstalledProductEntry {
            vendor: row.vendor.unwrap_or_default(),
            name: row.name.unwrap_or_default(),
            version: row.version.unwrap_or_default(),
            identifying_number: row.identifying_number.unwrap_or_default(),
            install_date: row.install_date.unwrap_or_default(),
        });
    }
    products
}

/// Reduce the optional product enumeration to its section value. Failure
/// downgrades to an empty list with a warning instead of aborting the run
pub fn products_or_empty(
    result: Result<Vec<InstalledProductEntry>, CollectorError>,
) -> Vec<InstalledProductEntry> {
    match result {
        Ok(products) => products,
        Err(err) => {
            warn!("[hostinv-core] Installed software enumeration failed, continuing without it: {err:?}");
            Vec::new()
        }
    }
}

#[cfg(target_os = "windows")]
/// Enumerate MSI-registered products. Known to be slow and may trigger
/// installer repair actions, only invoked when explicitly requested
pub(crate) fn collect(
    interface: &Management,
) -> Result<Vec<InstalledProductEntry>, CollectorError> {
    let rows: Vec<ProductRow> = interface.query()?;
    Ok(project_products(rows))
}

#[cfg(test)]
mod tests {
    use super::{products_or_empty, project_products, ProductRow};
    use crate::collectors::error::CollectorError;

    #[test]
    fn test_project_products() {
        let rows = vec![ProductRow {
            vendor: Some(String::from("Microsoft Corporation")),
            name: Some(String::from("Microsoft Visual C++ 2015-2022 Redistributable")),
            version: Some(String::from("14.38.33130")),
            identifying_number: Some(String::from("{65783b11-7b46-47c2-a602-a44e9a77f94b}")),
            install_date: Some(String::from("20240105")),
        }];

        let result = project_products(rows);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].vendor, "Microsoft Corporation");
        assert_eq!(result[0].version, "14.38.33130");
    }

    #[test]
    fn test_products_or_empty_success() {
        let result = products_or_empty(Ok(project_products(Vec::new())));
        assert!(result.is_empty());
    }

    #[test]
    fn test_products_or_empty_failure() {
        let result = products_or_empty(Err(CollectorError::Query));
        assert!(result.is_empty());
    }
}
