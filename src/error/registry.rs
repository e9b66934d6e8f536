//! Association registry errors

use std::time::Duration;

use super::InfatError;

/// Creates a scheme registration error from a Launch Services status code
pub fn cannot_register_scheme(scheme: impl Into<String>, code: i32) -> InfatError {
    InfatError::CannotRegisterScheme {
        scheme: scheme.into(),
        code,
    }
}

/// Creates a default application setting error
pub fn default_app_setting(identifier: impl Into<String>, reason: impl Into<String>) -> InfatError {
    InfatError::DefaultAppSettingError {
        identifier: identifier.into(),
        reason: reason.into(),
    }
}

/// Creates a legacy role handler registration error
pub fn cannot_register_type(identifier: impl Into<String>, code: i32) -> InfatError {
    InfatError::CannotRegisterType {
        identifier: identifier.into(),
        code,
    }
}

/// Creates an operation timeout error for a wait bounded by `bound`
pub fn timeout(operation: impl Into<String>, bound: Duration) -> InfatError {
    InfatError::OperationTimeout {
        operation: operation.into(),
        bound,
    }
}

/// Creates a platform not supported error for the running host
pub fn platform_not_supported() -> InfatError {
    InfatError::PlatformNotSupported {
        platform: std::env::consts::OS.to_string(),
    }
}
