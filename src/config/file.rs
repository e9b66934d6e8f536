//! The `config.toml` association file
//!
//! ```toml
//! [extensions]
//! md = "Zed"
//!
//! [types]
//! plain-text = "Zed"
//!
//! [schemes]
//! mailto = "Mail"
//! ```
//!
//! `[supertypes]` is accepted as another name for `[types]`.

use std::fs;
use std::path::Path;

use toml::{Table, Value};
use tracing::{Span, debug, warn};

use crate::association::{AssociationKind, AssociationRule};
use crate::error::{Result, config};

pub const EXTENSIONS_TABLE: &str = "extensions";
pub const SCHEMES_TABLE: &str = "schemes";
pub const TYPES_TABLE: &str = "types";
pub const SUPERTYPES_TABLE: &str = "supertypes";

/// `key = "App"` entries of one table, in file order
pub type RuleTable = Vec<(String, String)>;

/// Parsed association file.
///
/// `None` means the table is absent; `Some(vec![])` means present but empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub extensions: Option<RuleTable>,
    pub types: Option<RuleTable>,
    pub schemes: Option<RuleTable>,
}

impl Config {
    /// Load and validate the config at `path`
    pub fn load(path: &Path, span: &Span) -> Result<Self> {
        let origin = path.display().to_string();
        if !path.exists() {
            return Err(config::not_found(origin));
        }
        let content =
            fs::read_to_string(path).map_err(|e| config::read_failed(&origin, e.to_string()))?;

        let parsed = Self::from_toml(&content, &origin, span)?;
        parsed.validate(&origin)?;
        debug!(
            parent: span,
            path = %origin,
            extensions = parsed.extensions.as_ref().map_or(0, Vec::len),
            types = parsed.types.as_ref().map_or(0, Vec::len),
            schemes = parsed.schemes.as_ref().map_or(0, Vec::len),
            "Loaded config"
        );
        Ok(parsed)
    }

    /// Parse TOML text; `origin` names the source in errors
    pub fn from_toml(content: &str, origin: &str, span: &Span) -> Result<Self> {
        let document: Table = content
            .parse()
            .map_err(|e: toml::de::Error| config::parse_failed(origin, e.message()))?;

        if document.contains_key(TYPES_TABLE) && document.contains_key(SUPERTYPES_TABLE) {
            return Err(config::invalid(format!(
                "[{TYPES_TABLE}] and [{SUPERTYPES_TABLE}] are the same table; use only one"
            )));
        }

        let mut parsed = Self::default();
        for (name, value) in &document {
            let slot = match name.as_str() {
                EXTENSIONS_TABLE => &mut parsed.extensions,
                SCHEMES_TABLE => &mut parsed.schemes,
                TYPES_TABLE | SUPERTYPES_TABLE => &mut parsed.types,
                other => {
                    warn!(parent: span, key = other, "Ignoring unknown top-level key in config");
                    continue;
                }
            };
            *slot = Some(read_table(name, value)?);
        }

        Ok(parsed)
    }

    /// Reject a config that would apply nothing.
    ///
    /// An empty table next to a non-empty one is fine.
    pub fn validate(&self, origin: &str) -> Result<()> {
        let has_rules = [&self.extensions, &self.types, &self.schemes]
            .into_iter()
            .flatten()
            .any(|table| !table.is_empty());
        if !has_rules {
            return Err(config::no_tables(origin));
        }
        Ok(())
    }

    /// Rules in processing order: extensions, types, then schemes
    pub fn rules(&self) -> Vec<AssociationRule> {
        let tables = [
            (AssociationKind::Extension, &self.extensions),
            (AssociationKind::Supertype, &self.types),
            (AssociationKind::Scheme, &self.schemes),
        ];
        tables
            .into_iter()
            .filter_map(|(kind, table)| table.as_ref().map(|entries| (kind, entries)))
            .flat_map(|(kind, entries)| {
                entries
                    .iter()
                    .map(move |(key, app)| AssociationRule::new(kind, key.as_str(), app.as_str()))
            })
            .collect()
    }

    /// Render as TOML; empty tables are left out
    pub fn to_toml(&self) -> Result<String> {
        let mut document = Table::new();
        for (name, table) in [
            (EXTENSIONS_TABLE, &self.extensions),
            (TYPES_TABLE, &self.types),
            (SCHEMES_TABLE, &self.schemes),
        ] {
            let Some(entries) = table.as_ref().filter(|t| !t.is_empty()) else {
                continue;
            };
            let rendered: Table = entries
                .iter()
                .map(|(key, app)| (key.clone(), Value::String(app.clone())))
                .collect();
            document.insert(name.to_string(), Value::Table(rendered));
        }
        Ok(toml::to_string_pretty(&document)?)
    }

    /// Write to `path`, creating parent directories
    pub fn to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

fn read_table(name: &str, value: &Value) -> Result<RuleTable> {
    let Value::Table(table) = value else {
        return Err(config::invalid(format!(
            "'{name}' must be a table of key = \"Application\" entries"
        )));
    };

    table
        .iter()
        .map(|(key, value)| match value {
            Value::String(app) => Ok((key.clone(), app.clone())),
            _ => Err(config::value_not_string(name, key)),
        })
        .collect()
}
