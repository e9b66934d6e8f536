//! Type identifier and scheme resolution errors

use super::InfatError;

/// Creates an error for an extension with no registered type
pub fn cannot_derive(extension: impl Into<String>) -> InfatError {
    InfatError::CannotDeriveType {
        extension: extension.into(),
    }
}

/// Creates an error for a supertype key that is not in the table
pub fn invalid_supertype(key: impl Into<String>) -> InfatError {
    InfatError::InvalidSupertype { key: key.into() }
}

/// Creates an error for a known supertype whose identifier the OS does not declare
pub fn unsupported_supertype(key: impl Into<String>, identifier: impl Into<String>) -> InfatError {
    InfatError::UnsupportedSupertype {
        key: key.into(),
        identifier: identifier.into(),
    }
}

/// Creates an invalid scheme error
pub fn invalid_scheme(scheme: impl Into<String>) -> InfatError {
    InfatError::InvalidScheme {
        scheme: scheme.into(),
    }
}
