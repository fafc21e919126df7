//! Path manipulation utilities for the Zellij sandbox environment.
//!
//! This module provides functions for working with filesystem paths in the
//! Zellij plugin sandbox, where the host filesystem is mounted under `/host`.
//! It handles tilde expansion and the plugin data directory location.

use std::path::PathBuf;

/// Returns the data directory for Foodboard files (currently the log).
///
/// The directory is located at `/host/.local/share/zellij/foodboard` in the
/// Zellij sandbox. `/host` points to the cwd of the last focused terminal, or
/// the folder where Zellij was started; when that is the user's home
/// directory the actual path is `~/.local/share/zellij/foodboard`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("foodboard")
}

/// Expands tilde paths to use the `/host` prefix for the Zellij sandbox.
///
/// In the sandbox environment, the host's home directory (`~`) maps to
/// `/host`. This function converts tilde-prefixed paths (as configured for
/// `food_file` or `theme_file`) to their sandbox equivalents.
///
/// # Examples
///
/// ```
/// use foodboard::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/foods.json"), "/host/foods.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_maps_into_the_sandbox() {
        assert_eq!(expand_tilde("~/data/foods.json"), "/host/data/foods.json");
        assert_eq!(expand_tilde("~"), "/host");
    }

    #[test]
    fn other_paths_pass_through() {
        assert_eq!(expand_tilde("/etc/foods.json"), "/etc/foods.json");
        assert_eq!(expand_tilde("relative/foods.json"), "relative/foods.json");
    }
}
