//! Application discovery errors

use super::InfatError;

/// Creates an application not found error
pub fn not_found(name: impl Into<String>) -> InfatError {
    InfatError::ApplicationNotFound { name: name.into() }
}

/// Creates an error for when none of the application directories could be enumerated
pub fn directories_unreadable<I, S>(searched: I) -> InfatError
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let searched: Vec<String> = searched
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect();
    InfatError::ApplicationDirectoriesUnreadable {
        searched: searched.join(", "),
    }
}

/// Creates a manifest read error
pub fn manifest_read(path: impl Into<String>, reason: impl Into<String>) -> InfatError {
    InfatError::ManifestReadError {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid bundle error
pub fn invalid_bundle(path: impl Into<String>) -> InfatError {
    InfatError::InvalidBundle { path: path.into() }
}
