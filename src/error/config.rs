//! Configuration errors

use super::InfatError;

/// Creates an error for a config without any eligible table
pub fn no_tables(path: impl Into<String>) -> InfatError {
    InfatError::NoConfigTables { path: path.into() }
}

/// Creates an error for a table entry whose value is not a string
pub fn value_not_string(table: impl Into<String>, key: impl Into<String>) -> InfatError {
    InfatError::TomlValueNotString {
        table: table.into(),
        key: key.into(),
    }
}

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> InfatError {
    InfatError::ConfigNotFound { path: path.into() }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> InfatError {
    InfatError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> InfatError {
    InfatError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> InfatError {
    InfatError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates an error for an unreadable Launch Services handler database
pub fn launch_services_read(path: impl Into<String>, reason: impl Into<String>) -> InfatError {
    InfatError::LaunchServicesReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
