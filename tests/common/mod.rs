//! Common test utilities for Infat integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated home for one test: a config directory and an empty XDG layout
pub struct TestHome {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Stands in for `$XDG_CONFIG_HOME`
    pub config_home: PathBuf,
    /// Stands in for `$XDG_CONFIG_DIRS`
    pub config_dirs: PathBuf,
}

impl TestHome {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let config_home = temp.path().join("config");
        let config_dirs = temp.path().join("xdg");
        std::fs::create_dir_all(&config_home).expect("Failed to create config home");
        Self {
            temp,
            config_home,
            config_dirs,
        }
    }

    /// Path the search would find first
    pub fn default_config(&self) -> PathBuf {
        self.config_home.join("infat").join("config.toml")
    }

    /// Write `content` to the default config location
    #[allow(dead_code)]
    pub fn write_default_config(&self, content: &str) -> PathBuf {
        let path = self.default_config();
        self.write(&path, content);
        path
    }

    /// Write `content` to `name` inside the temp directory
    #[allow(dead_code)]
    pub fn write_config(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        self.write(&path, content);
        path
    }

    fn write(&self, path: &std::path::Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(path, content).expect("Failed to write config");
    }

    /// The infat binary with its config search pointed at this home
    pub fn cmd(&self) -> Command {
        let mut cmd = infat_cmd();
        cmd.env("XDG_CONFIG_HOME", &self.config_home)
            .env("XDG_CONFIG_DIRS", &self.config_dirs)
            .env_remove("INFAT_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn infat_cmd() -> Command {
    Command::cargo_bin("infat").expect("infat binary should be built")
}
