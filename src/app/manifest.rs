//! Application bundle manifest (`Contents/Info.plist`)

use std::path::{Path, PathBuf};

use plist::{Dictionary, Value};

use crate::error::{Result, app};

const BUNDLE_IDENTIFIER_KEY: &str = "CFBundleIdentifier";
const PACKAGE_TYPE_KEY: &str = "CFBundlePackageType";

/// Package type declared by application bundles
pub const APPLICATION_PACKAGE_TYPE: &str = "APPL";

/// A document type declared by an application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredType {
    pub name: String,
    pub identifiers: Vec<String>,
    pub extensions: Vec<String>,
}

/// Parsed key/value map of a bundle's manifest
#[derive(Debug, Clone)]
pub struct BundleManifest {
    path: PathBuf,
    dict: Dictionary,
}

/// Location of the manifest inside a bundle
pub fn manifest_path(bundle: &Path) -> PathBuf {
    bundle.join("Contents").join("Info.plist")
}

impl BundleManifest {
    /// Read the manifest of the bundle at `bundle`.
    ///
    /// Missing, unparsable, or non-dictionary manifests are all reported as
    /// [`ManifestReadError`](crate::error::InfatError::ManifestReadError).
    pub fn read(bundle: &Path) -> Result<Self> {
        let path = manifest_path(bundle);
        let value = Value::from_file(&path)
            .map_err(|e| app::manifest_read(path.display().to_string(), e.to_string()))?;

        let Value::Dictionary(dict) = value else {
            return Err(app::manifest_read(
                path.display().to_string(),
                "root is not a dictionary",
            ));
        };

        Ok(Self { path, dict })
    }

    fn string(&self, key: &str) -> Option<&str> {
        self.dict.get(key).and_then(Value::as_string)
    }

    /// The bundle identifier; a manifest without one is treated as corrupt
    pub fn bundle_identifier(&self) -> Result<&str> {
        self.string(BUNDLE_IDENTIFIER_KEY)
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                app::manifest_read(
                    self.path.display().to_string(),
                    format!("missing {BUNDLE_IDENTIFIER_KEY}"),
                )
            })
    }

    pub fn display_name(&self) -> Option<&str> {
        self.string("CFBundleDisplayName")
            .or_else(|| self.string("CFBundleName"))
    }

    pub fn version(&self) -> Option<&str> {
        self.string("CFBundleShortVersionString")
            .or_else(|| self.string("CFBundleVersion"))
    }

    pub fn package_type(&self) -> Option<&str> {
        self.string(PACKAGE_TYPE_KEY)
    }

    /// Document types from `CFBundleDocumentTypes`
    pub fn document_types(&self) -> Vec<DeclaredType> {
        let Some(entries) = self.dict.get("CFBundleDocumentTypes").and_then(Value::as_array) else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(Value::as_dictionary)
            .map(|entry| DeclaredType {
                name: entry
                    .get("CFBundleTypeName")
                    .and_then(Value::as_string)
                    .unwrap_or("Unnamed type")
                    .to_string(),
                identifiers: string_list(entry, "LSItemContentTypes"),
                extensions: string_list(entry, "CFBundleTypeExtensions"),
            })
            .collect()
    }

    /// URL schemes from `CFBundleURLTypes`
    pub fn url_schemes(&self) -> Vec<String> {
        let Some(entries) = self.dict.get("CFBundleURLTypes").and_then(Value::as_array) else {
            return Vec::new();
        };

        entries
            .iter()
            .filter_map(Value::as_dictionary)
            .flat_map(|entry| string_list(entry, "CFBundleURLSchemes"))
            .collect()
    }
}

fn string_list(dict: &Dictionary, key: &str) -> Vec<String> {
    dict.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_string)
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}
