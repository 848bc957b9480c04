use std::fmt;

#[derive(Debug)]
pub(crate) enum UtilsError {
    CreateDirectory,
    LogFile,
}

impl std::error::Error for UtilsError {}

impl fmt::Display for UtilsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilsError::CreateDirectory => write!(f, "Failed to create output directory"),
            UtilsError::LogFile => write!(f, "Failed to create log file"),
        }
    }
}
