//! Reading the user's current handlers back into a config
//!
//! Launch Services keeps per-user choices in
//! `~/Library/Preferences/com.apple.LaunchServices/com.apple.launchservices.secure.plist`
//! under an `LSHandlers` array.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{Span, debug, warn};

use super::file::{Config, RuleTable};
use crate::app::ApplicationLocator;
use crate::error::{Result, app, config};
use crate::uti::supertype;

const SECURE_PLIST: &str =
    "Library/Preferences/com.apple.LaunchServices/com.apple.launchservices.secure.plist";

const EXTENSION_TAG_CLASS: &str = "public.filename-extension";

/// Role value Launch Services writes for a cleared handler
const NO_HANDLER: &str = "-";

/// Location of the per-user handler database
pub fn default_handlers_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(SECURE_PLIST))
}

/// One `LSHandlers` entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Handler {
    #[serde(rename = "LSHandlerContentType")]
    pub content_type: Option<String>,
    #[serde(rename = "LSHandlerContentTag")]
    pub content_tag: Option<String>,
    #[serde(rename = "LSHandlerContentTagClass")]
    pub content_tag_class: Option<String>,
    #[serde(rename = "LSHandlerURLScheme")]
    pub url_scheme: Option<String>,
    #[serde(rename = "LSHandlerRoleAll")]
    pub role_all: Option<String>,
    #[serde(rename = "LSHandlerRoleViewer")]
    pub role_viewer: Option<String>,
    #[serde(rename = "LSHandlerRoleEditor")]
    pub role_editor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HandlerDatabase {
    #[serde(rename = "LSHandlers", default)]
    handlers: Vec<Handler>,
}

/// What a handler entry is bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerTarget {
    Scheme(String),
    ContentType(String),
    Extension(String),
}

impl Handler {
    /// Bundle identifier of the chosen application, if any
    pub fn bundle_id(&self) -> Option<&str> {
        [&self.role_all, &self.role_viewer, &self.role_editor]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|id| *id != NO_HANDLER && !id.is_empty())
    }

    pub fn target(&self) -> Option<HandlerTarget> {
        if let Some(scheme) = &self.url_scheme {
            return Some(HandlerTarget::Scheme(scheme.clone()));
        }
        if let Some(content_type) = &self.content_type {
            return Some(HandlerTarget::ContentType(content_type.clone()));
        }
        match (&self.content_tag_class, &self.content_tag) {
            (Some(class), Some(tag)) if class == EXTENSION_TAG_CLASS => {
                Some(HandlerTarget::Extension(tag.clone()))
            }
            _ => None,
        }
    }
}

/// Read every `LSHandlers` entry from the database at `path`
pub fn read_handlers(path: &Path) -> Result<Vec<Handler>> {
    let database: HandlerDatabase = plist::from_file(path)
        .map_err(|e| config::launch_services_read(path.display().to_string(), e.to_string()))?;
    Ok(database.handlers)
}

/// Turn handler entries into a config naming applications by display name.
///
/// A bundle that is no longer installed is an `ApplicationNotFound`, or is
/// skipped with a warning when `robust`. Content types outside the supertype
/// table are skipped.
pub fn config_from_handlers(
    handlers: &[Handler],
    locator: &ApplicationLocator,
    robust: bool,
    span: &Span,
) -> Result<Config> {
    let mut extensions = RuleTable::new();
    let mut types = RuleTable::new();
    let mut schemes = RuleTable::new();

    for handler in handlers {
        let Some(bundle_id) = handler.bundle_id() else {
            continue;
        };
        let Some(target) = handler.target() else {
            debug!(parent: span, bundle_id, "Skipping handler without a target");
            continue;
        };

        let app_name = match locator.find_by_bundle_id(bundle_id)? {
            Some(record) => record.name,
            None if robust => {
                warn!(parent: span, bundle_id, "Application not found, skipping");
                continue;
            }
            None => return Err(app::not_found(bundle_id)),
        };

        match target {
            HandlerTarget::Scheme(scheme) => upsert(&mut schemes, scheme.to_lowercase(), app_name),
            HandlerTarget::Extension(ext) => upsert(&mut extensions, ext.to_lowercase(), app_name),
            HandlerTarget::ContentType(content_type) => match supertype::key_for(&content_type) {
                Some(key) => upsert(&mut types, key.to_string(), app_name),
                None => debug!(parent: span, content_type = %content_type, "No supertype for content type, skipping"),
            },
        }
    }

    Ok(Config {
        extensions: Some(extensions),
        types: Some(types),
        schemes: Some(schemes),
    })
}

/// Later entries win, keeping the first entry's position
fn upsert(table: &mut RuleTable, key: String, app_name: String) {
    match table.iter_mut().find(|(existing, _)| *existing == key) {
        Some(entry) => entry.1 = app_name,
        None => table.push((key, app_name)),
    }
}
