//! Resolve an application identifier to exactly one installed application
//!
//! Resolution order (first match wins):
//! 1. An absolute path, `~` path or `file://` URL naming an existing
//!    application bundle resolves directly.
//! 2. The first enumerated bundle whose file name (without `.app`)
//!    case-insensitively equals the identifier.
//! 3. The first bundle whose manifest name (`CFBundleDisplayName` or
//!    `CFBundleName`) case-insensitively equals the identifier.
//! 4. For reverse-DNS identifiers, the first bundle whose manifest declares
//!    that `CFBundleIdentifier`.
//!
//! A record is always named after its bundle folder, so the name it reports
//! resolves back to the same bundle.

use std::path::{Path, PathBuf};

use tracing::{Span, debug};

use super::ApplicationRecord;
use super::directories::{self, Enumeration, has_bundle_extension};
use super::manifest::{APPLICATION_PACKAGE_TYPE, BundleManifest};
use crate::error::{Result, app};

/// Finds installed applications across the well-known directories
pub struct ApplicationLocator {
    search_dirs: Vec<PathBuf>,
    span: Span,
}

impl ApplicationLocator {
    pub fn new(search_dirs: Vec<PathBuf>, span: Span) -> Self {
        Self { search_dirs, span }
    }

    /// Locator over the standard macOS application directories
    pub fn system(span: Span) -> Self {
        Self::new(directories::default_search_dirs(), span)
    }

    /// Resolve a name, path, `file://` URL or bundle identifier
    pub fn resolve(&self, identifier: &str) -> Result<ApplicationRecord> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(app::not_found(identifier));
        }

        if let Some(path) = as_filesystem_path(identifier) {
            if path.is_dir() {
                if is_application_bundle(&path)? {
                    debug!(parent: &self.span, path = %path.display(), "Resolved application by path");
                    return record_for(&path);
                }
                return Err(app::invalid_bundle(path.display().to_string()));
            }
            debug!(parent: &self.span, path = %path.display(), "Path does not exist, searching by name");
        }

        let enumeration = self.enumerate()?;
        let wanted = strip_bundle_suffix(identifier).to_lowercase();

        if let Some(path) = enumeration
            .candidates
            .iter()
            .find(|candidate| bundle_stem(candidate).is_some_and(|stem| stem.to_lowercase() == wanted))
        {
            debug!(parent: &self.span, name = identifier, path = %path.display(), "Matched application by name");
            return record_for(path);
        }

        if let Some(record) = self.scan_for_manifest_name(&enumeration, &wanted) {
            debug!(parent: &self.span, name = identifier, path = %record.location.display(), "Matched application by manifest name");
            return Ok(record);
        }

        if looks_like_bundle_id(identifier) {
            if let Some(record) = self.scan_for_bundle_id(&enumeration, identifier) {
                debug!(parent: &self.span, bundle_id = identifier, path = %record.location.display(), "Matched application by bundle identifier");
                return Ok(record);
            }
        }

        debug!(parent: &self.span, name = identifier, "No application matched");
        Err(app::not_found(identifier))
    }

    /// Reverse lookup: the installed application declaring `bundle_id`
    pub fn find_by_bundle_id(&self, bundle_id: &str) -> Result<Option<ApplicationRecord>> {
        let enumeration = self.enumerate()?;
        Ok(self.scan_for_bundle_id(&enumeration, bundle_id))
    }

    fn enumerate(&self) -> Result<Enumeration> {
        let enumeration = directories::enumerate(&self.search_dirs, &self.span);
        if enumeration.is_systemic_failure() {
            return Err(app::directories_unreadable(
                enumeration.unreadable.iter().map(|d| d.display().to_string()),
            ));
        }
        Ok(enumeration)
    }

    fn scan_for_manifest_name(&self, enumeration: &Enumeration, wanted: &str) -> Option<ApplicationRecord> {
        enumeration.candidates.iter().find_map(|candidate| {
            let manifest = match BundleManifest::read(candidate) {
                Ok(manifest) => manifest,
                Err(e) => {
                    debug!(parent: &self.span, path = %candidate.display(), error = %e, "Skipping unreadable manifest");
                    return None;
                }
            };
            let matches = manifest
                .display_name()
                .is_some_and(|name| name.to_lowercase() == wanted);
            if !matches {
                return None;
            }
            record_for(candidate)
                .inspect_err(|e| debug!(parent: &self.span, path = %candidate.display(), error = %e, "Skipping bundle without identifier"))
                .ok()
        })
    }

    fn scan_for_bundle_id(&self, enumeration: &Enumeration, bundle_id: &str) -> Option<ApplicationRecord> {
        enumeration.candidates.iter().find_map(|candidate| {
            match record_for(candidate) {
                Ok(record) if record.bundle_id.eq_ignore_ascii_case(bundle_id) => Some(record),
                Ok(_) => None,
                Err(e) => {
                    debug!(parent: &self.span, path = %candidate.display(), error = %e, "Skipping unreadable manifest");
                    None
                }
            }
        })
    }
}

/// Interpret the identifier as a filesystem location, if it is one
fn as_filesystem_path(identifier: &str) -> Option<PathBuf> {
    if identifier.starts_with("file://") {
        return url::Url::parse(identifier)
            .ok()
            .and_then(|url| url.to_file_path().ok());
    }
    let path = directories::expand_tilde(identifier);
    path.is_absolute().then_some(path)
}

/// An application bundle is recognized by its declared package type; a
/// manifest without one falls back to the `.app` extension.
fn is_application_bundle(path: &Path) -> Result<bool> {
    match BundleManifest::read(path) {
        Ok(manifest) => Ok(match manifest.package_type() {
            Some(kind) => kind == APPLICATION_PACKAGE_TYPE,
            None => has_bundle_extension(path),
        }),
        // A `.app` directory with a broken manifest is a damaged install
        Err(e) if has_bundle_extension(path) => Err(e),
        Err(_) => Ok(false),
    }
}

fn record_for(path: &Path) -> Result<ApplicationRecord> {
    let manifest = BundleManifest::read(path)?;
    let bundle_id = manifest.bundle_identifier()?.to_string();
    let name = bundle_stem(path)
        .or_else(|| manifest.display_name().map(ToString::to_string))
        .unwrap_or_else(|| bundle_id.clone());

    Ok(ApplicationRecord {
        name,
        bundle_id,
        location: path.to_path_buf(),
        version: manifest.version().map(ToString::to_string),
    })
}

fn bundle_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(ToString::to_string)
}

fn strip_bundle_suffix(identifier: &str) -> &str {
    let len = identifier.len();
    if len > 4 && identifier.is_char_boundary(len - 4) && identifier[len - 4..].eq_ignore_ascii_case(".app") {
        &identifier[..len - 4]
    } else {
        identifier
    }
}

fn looks_like_bundle_id(identifier: &str) -> bool {
    identifier.contains('.')
        && !identifier.contains('/')
        && !identifier.chars().any(char::is_whitespace)
        && strip_bundle_suffix(identifier) == identifier
}
