//! Routing overrides applied to a rule before any resolution.
//!
//! Browsers register for the `http` scheme rather than as document handlers
//! for `.html`, so binding `html` or `https` is redirected to `http`.

use tracing::{Span, debug};

use crate::association::AssociationKind;
use crate::uti::{normalize_extension, normalize_scheme};

/// A fixed `(kind, key) -> (kind', key')` redirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingOverride {
    pub from_kind: AssociationKind,
    pub from_key: &'static str,
    pub to_kind: AssociationKind,
    pub to_key: &'static str,
}

impl RoutingOverride {
    pub const fn new(
        from_kind: AssociationKind,
        from_key: &'static str,
        to_kind: AssociationKind,
        to_key: &'static str,
    ) -> Self {
        Self {
            from_kind,
            from_key,
            to_kind,
            to_key,
        }
    }

    /// Compares against the key as the resolvers would normalize it, so
    /// `HTTPS://` and `.HTML` are caught too
    fn matches(&self, kind: AssociationKind, key: &str) -> bool {
        if self.from_kind != kind {
            return false;
        }
        match kind {
            AssociationKind::Supertype => self.from_key == key,
            AssociationKind::Extension => self.from_key == normalize_extension(key),
            AssociationKind::Scheme => self.from_key == normalize_scheme(key),
        }
    }
}

/// Overrides every policy starts with
pub const DEFAULT_OVERRIDES: &[RoutingOverride] = &[
    RoutingOverride::new(
        AssociationKind::Extension,
        "html",
        AssociationKind::Scheme,
        "http",
    ),
    RoutingOverride::new(
        AssociationKind::Scheme,
        "https",
        AssociationKind::Scheme,
        "http",
    ),
];

#[derive(Debug, Clone)]
pub struct RoutingPolicy {
    overrides: Vec<RoutingOverride>,
    span: Span,
}

impl Default for RoutingPolicy {
    fn default() -> Self {
        Self::new(Span::none())
    }
}

impl RoutingPolicy {
    pub fn new(span: Span) -> Self {
        Self {
            overrides: DEFAULT_OVERRIDES.to_vec(),
            span,
        }
    }

    /// Default overrides followed by `extra`; the defaults win on conflict
    #[cfg(test)]
    pub fn with_overrides(extra: impl IntoIterator<Item = RoutingOverride>) -> Self {
        let mut policy = Self::default();
        policy.overrides.extend(extra);
        policy
    }

    /// Effective `(kind, key)` for a rule; identity when nothing matches
    pub fn route(&self, kind: AssociationKind, key: &str) -> (AssociationKind, String) {
        match self.overrides.iter().find(|o| o.matches(kind, key)) {
            Some(o) => {
                debug!(parent: &self.span, from = %kind, key, to = %o.to_kind, target = o.to_key, "Routing override applied");
                (o.to_kind, o.to_key.to_string())
            }
            None => (kind, key.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_extension_routes_to_http_scheme() {
        let policy = RoutingPolicy::default();
        assert_eq!(
            policy.route(AssociationKind::Extension, "html"),
            (AssociationKind::Scheme, "http".to_string())
        );
        assert_eq!(
            policy.route(AssociationKind::Extension, "HTML"),
            (AssociationKind::Scheme, "http".to_string())
        );
    }

    #[test]
    fn test_https_scheme_routes_to_http() {
        let policy = RoutingPolicy::default();
        assert_eq!(
            policy.route(AssociationKind::Scheme, "https"),
            (AssociationKind::Scheme, "http".to_string())
        );
    }

    #[test]
    fn test_url_style_spellings_of_https_are_routed() {
        let policy = RoutingPolicy::default();
        for key in ["https://", "HTTPS:", " Https ", "HTTPS"] {
            assert_eq!(
                policy.route(AssociationKind::Scheme, key),
                (AssociationKind::Scheme, "http".to_string()),
                "{key:?} should route to http"
            );
        }
        assert_eq!(
            policy.route(AssociationKind::Extension, ".HTML").0,
            AssociationKind::Scheme
        );
    }

    #[test]
    fn test_route_is_identity_otherwise() {
        let policy = RoutingPolicy::default();
        for (kind, key) in [
            (AssociationKind::Extension, "htm"),
            (AssociationKind::Extension, "png"),
            (AssociationKind::Scheme, "http"),
            (AssociationKind::Scheme, "http://"),
            (AssociationKind::Scheme, "mailto"),
            (AssociationKind::Supertype, "html"),
            (AssociationKind::Supertype, "plain-text"),
        ] {
            assert_eq!(policy.route(kind, key), (kind, key.to_string()));
        }
    }

    #[test]
    fn test_policy_built_with_a_span_routes_like_the_default() {
        let policy = RoutingPolicy::new(tracing::info_span!("routing"));
        assert_eq!(
            policy.route(AssociationKind::Scheme, "https://"),
            (AssociationKind::Scheme, "http".to_string())
        );
    }

    #[test]
    fn test_extra_overrides_keep_defaults() {
        let policy = RoutingPolicy::with_overrides([RoutingOverride::new(
            AssociationKind::Extension,
            "xhtml",
            AssociationKind::Scheme,
            "http",
        )]);
        assert_eq!(
            policy.route(AssociationKind::Extension, "xhtml").0,
            AssociationKind::Scheme
        );
        assert_eq!(
            policy.route(AssociationKind::Scheme, "https"),
            (AssociationKind::Scheme, "http".to_string())
        );
    }
}
