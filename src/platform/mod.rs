//! Operating system collaborators
//!
//! This module defines the two seams the engine talks to:
//! - [`TypeSystem`]: resolves filename extensions to canonical type identifiers
//!   and answers conformance questions
//! - [`AssociationRegistry`]: reads and writes default handlers for content
//!   types and URL schemes
//!
//! The macOS implementation lives in [`macos`]. Other hosts get a clear
//! [`InfatError::PlatformNotSupported`](crate::error::InfatError) from [`system`].

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(test)]
pub mod testing;

/// Status code returned by Launch Services calls (`0` is success)
pub type OsStatus = i32;

/// Launch Services role a handler is registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Viewer,
    All,
}

impl Role {
    /// The `LSRolesMask` bit pattern for this role
    pub fn mask(self) -> u32 {
        match self {
            Role::Viewer => 0x0000_0002,
            Role::All => 0xFFFF_FFFF,
        }
    }
}

/// Error reported through the completion of an asynchronous registry call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsError {
    pub domain: String,
    pub code: i64,
    pub message: String,
}

impl OsError {
    pub const COCOA_DOMAIN: &'static str = "NSCocoaErrorDomain";

    /// `NSFileReadUnknownError`
    pub const FILE_READ_UNKNOWN: i64 = 256;

    pub fn new(domain: impl Into<String>, code: i64, message: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            code,
            message: message.into(),
        }
    }

    /// The generic "file read" failure the modern API reports for some
    /// content types it refuses to bind. Permission (257) and not-found (260)
    /// errors share the domain but are not recoverable.
    pub fn is_recoverable(&self) -> bool {
        self.domain == Self::COCOA_DOMAIN && self.code == Self::FILE_READ_UNKNOWN
    }
}

impl fmt::Display for OsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.message, self.domain, self.code)
    }
}

/// One-shot completion for [`AssociationRegistry::set_default_application`].
///
/// Implementations call it at most once, possibly from another thread.
pub type Completion = Box<dyn FnOnce(std::result::Result<(), OsError>) + Send + 'static>;

/// The OS content type system
pub trait TypeSystem: Send + Sync {
    /// Preferred identifier for a filename extension.
    ///
    /// Returns `None` when the OS only has a dynamic (synthesized) identifier.
    fn identifier_for_extension(&self, extension: &str) -> Option<String>;

    /// Whether the identifier is declared by the OS or an installed bundle
    fn is_declared(&self, identifier: &str) -> bool;

    /// Whether `identifier` conforms to `parent` (reflexive and transitive)
    fn conforms_to(&self, identifier: &str, parent: &str) -> bool;

    /// Preferred MIME type tag for the identifier
    fn preferred_mime_type(&self, identifier: &str) -> Option<String>;
}

/// The OS association registry
pub trait AssociationRegistry: Send + Sync {
    /// Modern "set default application for content type" call.
    ///
    /// Completes asynchronously through `completion`.
    fn set_default_application(&self, app: &Path, identifier: &str, completion: Completion);

    /// Legacy role handler registration by bundle identifier
    fn set_default_role_handler(&self, identifier: &str, role: Role, bundle_id: &str)
    -> OsStatus;

    /// Register (or update) an application bundle in the launch database
    fn register_application(&self, app: &Path) -> OsStatus;

    /// Set the default handler for a URL scheme by bundle identifier
    fn set_default_scheme_handler(&self, scheme: &str, bundle_id: &str) -> OsStatus;

    /// Bundle identifier of the default handler for a content type
    fn default_handler_for_type(&self, identifier: &str) -> Option<String>;

    /// Bundle identifiers of every handler registered for a content type
    fn handlers_for_type(&self, identifier: &str) -> Vec<String>;

    /// Bundle identifier of the default handler for a URL scheme
    fn default_handler_for_scheme(&self, scheme: &str) -> Option<String>;

    /// Bundle identifiers of every handler registered for a URL scheme
    fn handlers_for_scheme(&self, scheme: &str) -> Vec<String>;
}

/// The pair of OS collaborators for the running host
#[derive(Clone)]
pub struct SystemServices {
    pub types: Arc<dyn TypeSystem>,
    pub registry: Arc<dyn AssociationRegistry>,
}

/// Collaborators backed by the running operating system
#[cfg(target_os = "macos")]
#[allow(clippy::unnecessary_wraps)]
pub fn system() -> Result<SystemServices> {
    Ok(SystemServices {
        types: Arc::new(macos::CoreTypes),
        registry: Arc::new(macos::LaunchServices),
    })
}

/// Collaborators backed by the running operating system
#[cfg(not(target_os = "macos"))]
pub fn system() -> Result<SystemServices> {
    Err(crate::error::registry::platform_not_supported())
}
