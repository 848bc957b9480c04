use std::{
    fs::metadata,
    io::Error,
    time::{Duration, UNIX_EPOCH},
};

/// Get the last-write timestamp of a path as seconds since UNIX-EPOCH
pub(crate) fn last_write_time(path: &str) -> Result<i64, Error> {
    let meta = metadata(path)?;
    let modified = meta.modified()?;
    let since_epoch = modified
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::new(0, 0));
    Ok(since_epoch.as_secs() as i64)
}
