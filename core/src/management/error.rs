use std::fmt;

#[derive(Debug)]
pub enum ManagementError {
    Com,
    Connect,
    Query,
}

impl std::error::Error for ManagementError {}

impl fmt::Display for ManagementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManagementError::Com => write!(f, "Failed to initialize COM library"),
            ManagementError::Connect => {
                write!(f, "Failed to connect to management interface namespace")
            }
            ManagementError::Query => write!(f, "Failed to query management interface"),
        }
    }
}
