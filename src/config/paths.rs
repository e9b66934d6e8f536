//! Configuration file locations
//!
//! Follows the XDG base directory layout on every platform, so a dotfiles
//! checkout under `~/.config` works on macOS too.

use std::path::PathBuf;

use crate::error::{Result, config};

const APP_DIR: &str = "infat";
const CONFIG_FILE: &str = "config.toml";
const DEFAULT_CONFIG_DIRS: &str = "/etc/xdg";

/// User config directory: `$XDG_CONFIG_HOME`, or `~/.config`
fn config_home() -> Option<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::home_dir().map(|home| home.join(".config")),
    }
}

/// Candidate config files in order of preference
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(home) = config_home() {
        paths.push(home.join(APP_DIR).join(CONFIG_FILE));
    }

    let system_dirs = std::env::var("XDG_CONFIG_DIRS")
        .ok()
        .filter(|dirs| !dirs.is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_DIRS.to_string());
    paths.extend(
        system_dirs
            .split(':')
            .filter(|dir| !dir.is_empty())
            .map(|dir| PathBuf::from(dir).join(APP_DIR).join(CONFIG_FILE)),
    );

    paths
}

/// Where `init` writes when no output path is given
pub fn default_config_path() -> Result<PathBuf> {
    search_paths()
        .into_iter()
        .next()
        .ok_or_else(|| config::not_found("$XDG_CONFIG_HOME/infat/config.toml"))
}

/// First existing config file
pub fn find_config() -> Result<PathBuf> {
    let paths = search_paths();
    if let Some(found) = paths.iter().find(|path| path.is_file()) {
        return Ok(found.clone());
    }
    let first = paths
        .first()
        .map_or_else(|| "infat/config.toml".to_string(), |p| p.display().to_string());
    Err(config::not_found(first))
}
