pub(crate) mod directory;
mod error;
pub(crate) mod metadata;
