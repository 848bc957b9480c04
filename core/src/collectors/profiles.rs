use crate::document::UserProfileEntry;
use crate::filesystem::{
    directory::{get_filename, list_directories},
    metadata::last_write_time,
};
use log::warn;

#[cfg(target_os = "windows")]
use crate::utils::environment::get_env_value;

/// Inventory the per-user profile directories under the users root. An
/// unreadable root yields no profiles, not an error
pub fn collect_profiles(users_root: &str) -> Vec<UserProfileEntry> {
    let dirs_result = list_directories(users_root);
    let dirs = match dirs_result {
        Ok(results) => results,
        Err(err) => {
            warn!("[hostinv-core] Could not list user profile directories at {users_root}: {err:?}");
            return Vec::new();
        }
    };

    let mut profiles = Vec::new();
    for dir in dirs {
        let last_write = match last_write_time(&dir) {
            Ok(result) => result,
            Err(err) => {
                warn!("[hostinv-core] Could not get timestamps for {dir}: {err:?}");
                0
            }
        };
        profiles.push(UserProfileEntry {
            name: get_filename(&dir),
            last_write,
            path: dir,
        });
    }
    profiles
}

/// Name of the most recently written profile directory. A heuristic proxy for
/// the last interactive user, not an authoritative logon record
pub fn last_touched(profiles: &[UserProfileEntry]) -> Option<String> {
    profiles
        .iter()
        .max_by_key(|profile| profile.last_write)
        .map(|profile| profile.name.clone())
}

#[cfg(target_os = "windows")]
/// Path to the users root on the system drive
pub(crate) fn users_root() -> String {
    let mut drive = get_env_value("SystemDrive");
    if drive.is_empty() {
        drive = String::from("C:");
    }
    format!("{drive}\\Users")
}
