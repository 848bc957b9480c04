pub(crate) mod environment;
mod error;
pub(crate) mod logging;
pub(crate) mod time;
pub(crate) mod units;
