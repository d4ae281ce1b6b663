// Config path utilities.
// Resolves per-user config and cache directories for forecast-menu.

use std::path::PathBuf;

use directories::ProjectDirs;

const APP_NAME: &str = "forecast-menu";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Get the base config directory (~/.config/forecast-menu on Linux).
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the base cache directory (~/.cache/forecast-menu on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the settings file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Path to the log file. Logs can't go to the terminal while the UI owns it.
pub fn log_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(format!("{}.log", APP_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        // Path construction only, nothing touches the filesystem
        if let Some(path) = config_path() {
            assert!(path.ends_with("config.json"));
        }
        if let Some(path) = log_path() {
            assert!(path.ends_with("forecast-menu.log"));
        }
    }
}
