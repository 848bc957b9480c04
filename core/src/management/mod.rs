use error::ManagementError;
use log::error;
use serde::de::DeserializeOwned;
use wmi::{COMLibrary, WMIConnection};

pub(crate) mod error;

/// Open connections to the namespaces the collectors read from. CIMV2 carries
/// the hardware and OS classes, StandardCimv2 carries the net adapter classes
pub(crate) struct Management {
    cimv2: WMIConnection,
    standard_cimv2: WMIConnection,
}

impl Management {
    pub(crate) fn connect() -> Result<Management, ManagementError> {
        let com_result = COMLibrary::new();
        let com = match com_result {
            Ok(result) => result,
            Err(err) => {
                error!("[hostinv-core] Could not initialize COM library: {err:?}");
                return Err(ManagementError::Com);
            }
        };

        let cimv2_result = WMIConnection::new(com);
        let cimv2 = match cimv2_result {
            Ok(result) => result,
            Err(err) => {
                error!("[hostinv-core] Could not connect to ROOT\\CIMV2: {err:?}");
                return Err(ManagementError::Connect);
            }
        };

        let standard_result = WMIConnection::with_namespace_path("ROOT\\StandardCimv2", com);
        let standard_cimv2 = match standard_result {
            Ok(result) => result,
            Err(err) => {
                error!("[hostinv-core] Could not connect to ROOT\\StandardCimv2: {err:?}");
                return Err(ManagementError::Connect);
            }
        };

        Ok(Management {
            cimv2,
            standard_cimv2,
        })
    }

    /// Query a class in ROOT\CIMV2. The class and selected properties come
    /// from the row type's serde renames
    pub(crate) fn query<T: DeserializeOwned>(&self) -> Result<Vec<T>, ManagementError> {
        match self.cimv2.query() {
            Ok(results) => Ok(results),
            Err(err) => {
                error!("[hostinv-core] Management interface query failed: {err:?}");
                Err(ManagementError::Query)
            }
        }
    }

    /// Query a class in ROOT\StandardCimv2
    pub(crate) fn query_standard<T: DeserializeOwned>(&self) -> Result<Vec<T>, ManagementError> {
        match self.standard_cimv2.query() {
            Ok(results) => Ok(results),
            Err(err) => {
                error!("[hostinv-core] Management interface query failed: {err:?}");
                Err(ManagementError::Query)
            }
        }
    }
}
