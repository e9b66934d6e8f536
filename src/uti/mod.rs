//! Content type resolution
//!
//! Turns the keys found in a config (extensions, supertype keys and URL
//! schemes) into canonical identifiers the association registry accepts.

pub mod conformance;
pub mod supertype;

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{Span, debug};

use crate::error::{Result, types};
use crate::platform::TypeSystem;

/// Canonical identifier of a content type, e.g. `public.plain-text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeIdentifier {
    pub identifier: String,
    pub preferred_mime_type: Option<String>,
    /// Umbrella types this type conforms to, excluding itself
    pub conforms_to: BTreeSet<String>,
}

impl TypeIdentifier {
    pub fn conforms_to(&self, parent: &str) -> bool {
        self.identifier == parent || self.conforms_to.contains(parent)
    }
}

/// Resolves config keys against the OS type system
pub struct TypeResolver {
    types: Arc<dyn TypeSystem>,
    span: Span,
}

impl TypeResolver {
    pub fn new(types: Arc<dyn TypeSystem>, span: Span) -> Self {
        Self { types, span }
    }

    /// Resolve a filename extension (case-insensitive, leading dot allowed).
    ///
    /// An extension the OS only knows by a synthesized identifier is an
    /// error rather than a silent no-op.
    pub fn from_extension(&self, extension: &str) -> Result<TypeIdentifier> {
        let normalized = normalize_extension(extension);
        if normalized.is_empty() {
            return Err(types::cannot_derive(extension));
        }

        let Some(identifier) = self.types.identifier_for_extension(&normalized) else {
            debug!(parent: &self.span, extension = %normalized, "No declared type for extension");
            return Err(types::cannot_derive(normalized));
        };

        debug!(parent: &self.span, extension = %normalized, identifier = %identifier, "Resolved extension");
        Ok(self.describe(identifier))
    }

    /// Resolve a supertype key such as `plain-text` or `source-code`.
    ///
    /// A declared reverse-DNS identifier is accepted as-is.
    pub fn from_supertype_key(&self, key: &str) -> Result<TypeIdentifier> {
        let identifier = match supertype::identifier_for(key) {
            Some(identifier) => {
                if !self.types.is_declared(identifier) {
                    return Err(types::unsupported_supertype(key, identifier));
                }
                identifier.to_string()
            }
            None if key.contains('.') && self.types.is_declared(key) => key.to_string(),
            None => return Err(types::invalid_supertype(key)),
        };

        debug!(parent: &self.span, key, identifier = %identifier, "Resolved supertype");
        Ok(self.describe(identifier))
    }

    /// Normalize and validate a URL scheme token.
    ///
    /// Accepts an ASCII letter followed by letters, digits, `+`, `-` or `.`.
    /// A trailing `:` or `://` is tolerated.
    pub fn resolve_scheme(&self, scheme: &str) -> Result<String> {
        let normalized = normalize_scheme(scheme);

        let mut chars = normalized.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid {
            return Err(types::invalid_scheme(scheme));
        }
        Ok(normalized)
    }

    fn describe(&self, identifier: String) -> TypeIdentifier {
        let conforms_to = conformance::UMBRELLA_TYPES
            .iter()
            .filter(|parent| **parent != identifier)
            .filter(|parent| self.types.conforms_to(&identifier, parent))
            .map(|parent| (*parent).to_string())
            .collect();

        TypeIdentifier {
            preferred_mime_type: self.types.preferred_mime_type(&identifier),
            conforms_to,
            identifier,
        }
    }
}

/// `" .PNG"` -> `"png"`
pub fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_lowercase()
}

/// `"HTTPS://"` -> `"https"`; the token itself is not validated
pub fn normalize_scheme(scheme: &str) -> String {
    let trimmed = scheme.trim();
    trimmed
        .strip_suffix("://")
        .or_else(|| trimmed.strip_suffix(':'))
        .unwrap_or(trimmed)
        .to_ascii_lowercase()
}
