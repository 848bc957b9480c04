use super::error::UtilsError;
use crate::structs::options::CollectionOptions;
use log::{error, LevelFilter};
use std::fs::{create_dir_all, File};

/// Create the inventory.log file inside the output directory and pick the
/// logging level from the collection options
pub(crate) fn create_log_file(
    options: &CollectionOptions,
) -> Result<(File, LevelFilter), UtilsError> {
    let result = create_dir_all(&options.directory);
    match result {
        Ok(_) => {}
        Err(err) => {
            error!(
                "[hostinv-core] Failed to create logging output directory for {}. Error: {err:?}",
                options.directory
            );
            return Err(UtilsError::CreateDirectory);
        }
    }

    let output_result = File::create(format!("{}/inventory.log", options.directory));
    let log_file = match output_result {
        Ok(result) => result,
        Err(err) => {
            error!(
                "[hostinv-core] Failed to create log file at {}. Error: {err:?}",
                options.directory
            );
            return Err(UtilsError::LogFile);
        }
    };

    let level = if let Some(log_level) = &options.logging {
        match log_level.to_lowercase().as_str() {
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            _ => LevelFilter::Warn,
        }
    } else {
        LevelFilter::Warn
    };

    Ok((log_file, level))
}

#[cfg(test)]
mod tests {
    use super::create_log_file;
    use crate::structs::options::CollectionOptions;
    use log::{warn, LevelFilter};
    use simplelog::{Config, WriteLogger};

    #[test]
    fn test_create_log_file() {
        let test = CollectionOptions {
            directory: String::from("./tmp/logging"),
            include_software: false,
            logging: None,
        };

        let (result, level) = create_log_file(&test).unwrap();
        let _ = WriteLogger::init(level, Config::default(), result);
        warn!("A simple fancy logger!");
        assert_eq!(level, LevelFilter::Warn);
    }

    #[test]
    fn test_create_log_file_info_level() {
        let test = CollectionOptions {
            directory: String::from("./tmp/logging"),
            include_software: false,
            logging: Some(String::from("info")),
        };

        let (_, level) = create_log_file(&test).unwrap();
        assert_eq!(level, LevelFilter::Info);
    }
}
