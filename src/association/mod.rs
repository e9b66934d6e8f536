//! Association rules and the per-rule pipeline
//!
//! A rule travels `Pending → Routed → TypeResolved → AppResolved → Applied`.
//! [`Associator`] runs one rule through every stage and reports the stage
//! where it stopped, so `set` and the batch runner share a single code path.

pub mod applier;

use std::fmt;
use std::time::Duration;

use tracing::{Span, debug, info_span};

pub use applier::{AssociationApplier, DEFAULT_TIMEOUT};

use crate::app::{ApplicationLocator, ApplicationRecord};
use crate::error::InfatError;
use crate::platform::SystemServices;
use crate::routing::RoutingPolicy;
use crate::uti::{TypeIdentifier, TypeResolver};

/// What a rule's key names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssociationKind {
    Extension,
    Scheme,
    Supertype,
}

impl AssociationKind {
    /// Position in batch processing order: extensions, supertypes, schemes
    pub fn processing_rank(self) -> u8 {
        match self {
            AssociationKind::Extension => 0,
            AssociationKind::Supertype => 1,
            AssociationKind::Scheme => 2,
        }
    }
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssociationKind::Extension => "extension",
            AssociationKind::Scheme => "scheme",
            AssociationKind::Supertype => "type",
        };
        f.write_str(name)
    }
}

/// One `(kind, key, app)` entry of a config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationRule {
    pub kind: AssociationKind,
    pub key: String,
    pub app_name: String,
}

impl AssociationRule {
    pub fn new(kind: AssociationKind, key: impl Into<String>, app_name: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            app_name: app_name.into(),
        }
    }

    /// Short form used in output, e.g. `.png`, `mailto://` or `plain-text`
    pub fn label(&self) -> String {
        match self.kind {
            AssociationKind::Extension => format!(".{}", self.key.trim_start_matches('.')),
            AssociationKind::Scheme => format!("{}://", self.key),
            AssociationKind::Supertype => self.key.clone(),
        }
    }
}

/// Stage a rule was in when it stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    TypeResolution,
    AppResolution,
    Application,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::TypeResolution => "type resolution",
            Stage::AppResolution => "application lookup",
            Stage::Application => "registry update",
        };
        f.write_str(name)
    }
}

/// Resolved target of a routed rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    ContentType(TypeIdentifier),
    Scheme(String),
}

impl Target {
    pub fn name(&self) -> &str {
        match self {
            Target::ContentType(ty) => &ty.identifier,
            Target::Scheme(scheme) => scheme,
        }
    }
}

/// A rule that reached the registry
#[derive(Debug, Clone)]
pub struct Binding {
    pub rule: AssociationRule,
    /// Kind and key after routing
    pub routed_kind: AssociationKind,
    pub routed_key: String,
    pub target: Target,
    pub app: ApplicationRecord,
}

impl Binding {
    pub fn was_rerouted(&self) -> bool {
        self.routed_kind != self.rule.kind
            || !self
                .routed_key
                .eq_ignore_ascii_case(self.rule.key.trim_start_matches('.'))
    }
}

/// A rule that stopped before being applied
#[derive(Debug)]
pub struct RuleFailure {
    pub rule: AssociationRule,
    pub stage: Stage,
    pub error: InfatError,
}

impl From<RuleFailure> for InfatError {
    fn from(failure: RuleFailure) -> Self {
        failure.error
    }
}

/// Runs single rules through routing, resolution and application
pub struct Associator {
    routing: RoutingPolicy,
    types: TypeResolver,
    locator: ApplicationLocator,
    applier: AssociationApplier,
    span: Span,
}

impl Associator {
    pub fn new(
        routing: RoutingPolicy,
        types: TypeResolver,
        locator: ApplicationLocator,
        applier: AssociationApplier,
        span: Span,
    ) -> Self {
        Self {
            routing,
            types,
            locator,
            applier,
            span,
        }
    }

    /// Pipeline over the host's collaborators and application directories
    pub fn for_system(services: &SystemServices, timeout: Duration, span: &Span) -> Self {
        Self::new(
            RoutingPolicy::new(info_span!(parent: span, "routing")),
            TypeResolver::new(services.types.clone(), info_span!(parent: span, "types")),
            ApplicationLocator::system(info_span!(parent: span, "locator")),
            AssociationApplier::new(
                services.registry.clone(),
                timeout,
                info_span!(parent: span, "applier"),
            ),
            span.clone(),
        )
    }

    /// Run one rule to completion
    pub fn apply(&self, rule: &AssociationRule) -> Result<Binding, RuleFailure> {
        let fail = |stage: Stage| {
            move |error: InfatError| RuleFailure {
                rule: rule.clone(),
                stage,
                error,
            }
        };

        let (routed_kind, routed_key) = self.routing.route(rule.kind, &rule.key);
        debug!(parent: &self.span, rule = %rule.label(), routed = %routed_kind, key = %routed_key, "Routed rule");

        let target = match routed_kind {
            AssociationKind::Extension => self
                .types
                .from_extension(&routed_key)
                .map(Target::ContentType),
            AssociationKind::Supertype => self
                .types
                .from_supertype_key(&routed_key)
                .map(Target::ContentType),
            AssociationKind::Scheme => self.types.resolve_scheme(&routed_key).map(Target::Scheme),
        }
        .map_err(fail(Stage::TypeResolution))?;

        let app = self
            .locator
            .resolve(&rule.app_name)
            .map_err(fail(Stage::AppResolution))?;

        let applied = match &target {
            Target::ContentType(ty) => self.applier.bind_file(&app, ty),
            Target::Scheme(scheme) => self.applier.bind_scheme(&app, scheme),
        };
        applied.map_err(fail(Stage::Application))?;

        Ok(Binding {
            rule: rule.clone(),
            routed_kind,
            routed_key,
            target,
            app,
        })
    }
}
