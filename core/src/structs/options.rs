#[derive(Debug)]
pub struct CollectionOptions {
    /// Directory the snapshot and inventory.log are written into
    pub directory: String,
    /// Include the slow MSI product enumeration
    pub include_software: bool,
    /// Optional log level name. Defaults to warn
    pub logging: Option<String>,
}
