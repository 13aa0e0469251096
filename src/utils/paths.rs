use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".jangorithm";
const CONFIG_FILE: &str = "config.json";

/// Environment variable that relocates the data directory.
pub const HOME_ENV: &str = "JANGORITHM_HOME";

/// Returns the data directory, defaulting to `~/.jangorithm`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// File backing a storage key, e.g. `jangorithm_expenses.json`.
pub fn store_file_in(base: &Path, key: &str) -> PathBuf {
    base.join(format!("{key}.json"))
}
