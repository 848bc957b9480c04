use std::fmt;

#[cfg(target_os = "windows")]
use crate::management::error::ManagementError;

#[derive(Debug)]
pub enum CollectorError {
    Query,
    EmptyClass,
}

#[cfg(target_os = "windows")]
impl From<ManagementError> for CollectorError {
    fn from(_err: ManagementError) -> Self {
        CollectorError::Query
    }
}

impl std::error::Error for CollectorError {}

impl fmt::Display for CollectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectorError::Query => {
                write!(f, "Failed to query management interface class")
            }
            CollectorError::EmptyClass => {
                write!(f, "Management interface class returned no instances")
            }
        }
    }
}
