use std::fmt;

#[derive(Debug)]
pub enum OutputError {
    Serialize,
    CreateDirectory,
    CreateFile,
    WriteFile,
}

impl std::error::Error for OutputError {}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Serialize => write!(f, "Failed to serialize inventory document"),
            OutputError::CreateDirectory => write!(f, "Failed to create output directory"),
            OutputError::CreateFile => write!(f, "Failed to create output file"),
            OutputError::WriteFile => write!(f, "Failed to write output file"),
        }
    }
}
