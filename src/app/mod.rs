//! Installed application discovery
//!
//! This module handles:
//! - Resolving a user-supplied name, path or bundle identifier to one
//!   installed application ([`ApplicationLocator`])
//! - Enumerating the well-known application directories ([`directories`])
//! - Reading bundle manifests ([`manifest`])

pub mod directories;
pub mod locator;
pub mod manifest;

use std::path::PathBuf;

pub use locator::ApplicationLocator;

/// Identity of an installed application.
///
/// Resolved fresh on every call; the bundle on disk is the source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRecord {
    /// Display name
    pub name: String,
    /// Stable OS identifier read from the manifest
    pub bundle_id: String,
    /// Bundle location on disk
    pub location: PathBuf,
    pub version: Option<String>,
}
