//! Error types and handling for Infat
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`app`]: Application discovery and manifest errors
//! - [`types`]: Type identifier and scheme resolution errors
//! - [`registry`]: Association registry (OS call) errors
//! - [`config`]: Configuration file errors

pub mod app;
pub mod config;
pub mod registry;
pub mod types;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Infat operations
#[derive(Error, Diagnostic, Debug)]
pub enum InfatError {
    // Application errors
    #[error("Application not found: {name}")]
    #[diagnostic(
        code(infat::app::not_found),
        help("Check the application name, or pass the full path to the .app bundle")
    )]
    ApplicationNotFound { name: String },

    #[error("No application directories could be read (searched: {searched})")]
    #[diagnostic(code(infat::app::directories_unreadable))]
    ApplicationDirectoriesUnreadable { searched: String },

    #[error("Error reading application manifest at '{path}': {reason}")]
    #[diagnostic(
        code(infat::app::manifest_read),
        help("The application bundle may be damaged; try reinstalling it")
    )]
    ManifestReadError { path: String, reason: String },

    #[error("Not an application bundle: {path}")]
    #[diagnostic(code(infat::app::invalid_bundle))]
    InvalidBundle { path: String },

    // Type resolution errors
    #[error("Could not derive a type identifier for extension '.{extension}'")]
    #[diagnostic(code(infat::types::cannot_derive))]
    CannotDeriveType { extension: String },

    #[error("Invalid supertype: {key}")]
    #[diagnostic(
        code(infat::types::invalid_supertype),
        help("Run 'infat info --type <KEY>' with a kebab-case supertype such as plain-text or image")
    )]
    InvalidSupertype { key: String },

    #[error("Supertype '{key}' ({identifier}) is not available on this system")]
    #[diagnostic(code(infat::types::unsupported_supertype))]
    UnsupportedSupertype { key: String, identifier: String },

    #[error("Invalid URL scheme: {scheme}")]
    #[diagnostic(
        code(infat::types::invalid_scheme),
        help("Schemes start with a letter and contain only letters, digits, '+', '-' or '.'")
    )]
    InvalidScheme { scheme: String },

    // Registry errors
    #[error("Cannot register URL scheme '{scheme}', Launch Services error: {code}")]
    #[diagnostic(code(infat::registry::cannot_register_scheme))]
    CannotRegisterScheme { scheme: String, code: i32 },

    #[error("Failed to set default application for '{identifier}': {reason}")]
    #[diagnostic(code(infat::registry::default_app_setting))]
    DefaultAppSettingError { identifier: String, reason: String },

    #[error("Cannot register type '{identifier}', Launch Services error: {code}")]
    #[diagnostic(code(infat::registry::cannot_register_type))]
    CannotRegisterType { identifier: String, code: i32 },

    #[error("Operation timed out after {bound:?}: {operation}")]
    #[diagnostic(
        code(infat::registry::timeout),
        help("The system service did not respond; raise the bound with --timeout")
    )]
    OperationTimeout {
        operation: String,
        bound: std::time::Duration,
    },

    #[error("Platform not supported: {platform}")]
    #[diagnostic(
        code(infat::registry::platform_not_supported),
        help("Changing file associations requires macOS")
    )]
    PlatformNotSupported { platform: String },

    // Configuration errors
    #[error("No valid configuration tables found in '{path}'")]
    #[diagnostic(
        code(infat::config::no_tables),
        help("Add at least one non-empty [extensions], [schemes] or [types] table")
    )]
    NoConfigTables { path: String },

    #[error("Value for key '{key}' in [{table}] is not a string")]
    #[diagnostic(code(infat::config::value_not_string))]
    TomlValueNotString { table: String, key: String },

    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(infat::config::not_found),
        help("Pass a config with --config, or run 'infat init' to create one")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(infat::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(infat::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(infat::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read Launch Services handlers from '{path}': {reason}")]
    #[diagnostic(code(infat::config::launch_services_read))]
    LaunchServicesReadFailed { path: String, reason: String },

    // Command line errors
    #[error("Missing required option: {message}")]
    #[diagnostic(code(infat::cli::missing_option))]
    MissingOption { message: String },

    #[error("Conflicting options: {message}")]
    #[diagnostic(code(infat::cli::conflicting_options))]
    ConflictingOptions { message: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(infat::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(infat::fs::io_error))]
    IoError { message: String },
}

impl InfatError {
    /// Whether robust mode may skip this error and continue with the next rule.
    ///
    /// Only the routine "application is not installed" case qualifies. A
    /// systemic discovery failure, a broken manifest or any OS call failure
    /// always aborts.
    pub fn is_skippable(&self) -> bool {
        matches!(self, InfatError::ApplicationNotFound { .. })
    }
}

impl From<std::io::Error> for InfatError {
    fn from(err: std::io::Error) -> Self {
        InfatError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for InfatError {
    fn from(err: toml::de::Error) -> Self {
        InfatError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.message().to_string(),
        }
    }
}

impl From<toml::ser::Error> for InfatError {
    fn from(err: toml::ser::Error) -> Self {
        InfatError::ConfigInvalid {
            message: err.to_string(),
        }
    }
}

impl From<plist::Error> for InfatError {
    fn from(err: plist::Error) -> Self {
        InfatError::LaunchServicesReadFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for InfatError {
    fn from(err: inquire::InquireError) -> Self {
        InfatError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InfatError>;
