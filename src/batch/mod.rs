//! Config-driven batch application
//!
//! Rules run one at a time in table order: extensions, then supertypes, then
//! schemes. In robust mode a rule whose application is not installed is
//! skipped; any other failure aborts the run. Nothing already applied is
//! rolled back.

use tracing::{Span, error, info, warn};

use crate::association::{AssociationRule, Associator, Binding, RuleFailure};

/// Final state of a rule that did not abort the run
#[derive(Debug)]
pub enum RuleOutcome {
    Applied(Binding),
    Skipped { rule: AssociationRule, reason: String },
}

/// Per-rule results in processing order, plus the aborting failure if any
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<RuleOutcome>,
    pub failure: Option<RuleFailure>,
}

impl BatchReport {
    pub fn applied(&self) -> impl Iterator<Item = &Binding> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            RuleOutcome::Applied(binding) => Some(binding),
            RuleOutcome::Skipped { .. } => None,
        })
    }

    pub fn applied_count(&self) -> usize {
        self.applied().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.applied_count()
    }

    pub fn is_aborted(&self) -> bool {
        self.failure.is_some()
    }
}

pub struct BatchRunner {
    associator: Associator,
    span: Span,
}

impl BatchRunner {
    pub fn new(associator: Associator, span: Span) -> Self {
        Self { associator, span }
    }

    /// Apply every rule, stopping at the first failure robust mode cannot skip
    pub fn run(&self, rules: &[AssociationRule], robust: bool) -> BatchReport {
        let mut ordered: Vec<&AssociationRule> = rules.iter().collect();
        ordered.sort_by_key(|rule| rule.kind.processing_rank());

        info!(parent: &self.span, rules = ordered.len(), robust, "Applying associations");

        let mut report = BatchReport::default();
        for rule in ordered {
            match self.associator.apply(rule) {
                Ok(binding) => report.outcomes.push(RuleOutcome::Applied(binding)),
                Err(failure) if robust && failure.error.is_skippable() => {
                    warn!(
                        parent: &self.span,
                        rule = %rule.label(),
                        app = %rule.app_name,
                        "Skipping rule: {}",
                        failure.error
                    );
                    report.outcomes.push(RuleOutcome::Skipped {
                        rule: failure.rule,
                        reason: failure.error.to_string(),
                    });
                }
                Err(failure) => {
                    error!(
                        parent: &self.span,
                        rule = %rule.label(),
                        stage = %failure.stage,
                        "Aborting: {}",
                        failure.error
                    );
                    report.failure = Some(failure);
                    break;
                }
            }
        }

        info!(
            parent: &self.span,
            applied = report.applied_count(),
            skipped = report.skipped_count(),
            aborted = report.is_aborted(),
            "Batch finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::association::tests::Harness;
    use crate::association::{AssociationKind, Stage};
    use crate::error::InfatError;
    use crate::platform::OsError;
    use crate::platform::testing::{FakeRegistry, ModernBehavior};

    fn runner(harness: Harness) -> (BatchRunner, std::sync::Arc<FakeRegistry>, tempfile::TempDir) {
        let Harness {
            _temp,
            registry,
            associator,
        } = harness;
        (BatchRunner::new(associator, Span::none()), registry, _temp)
    }

    fn image_rules() -> Vec<AssociationRule> {
        vec![
            AssociationRule::new(AssociationKind::Extension, "png", "Preview"),
            AssociationRule::new(AssociationKind::Extension, "jpg", "NoSuchApp"),
            AssociationRule::new(AssociationKind::Extension, "gif", "Preview"),
        ]
    }

    #[test]
    fn test_robust_mode_skips_missing_application() {
        let (runner, registry, _temp) = runner(Harness::new());
        let report = runner.run(&image_rules(), true);

        assert!(!report.is_aborted());
        assert_eq!(report.applied_count(), 2);
        assert_eq!(report.skipped_count(), 1);
        assert!(matches!(
            &report.outcomes[1],
            RuleOutcome::Skipped { rule, reason } if rule.key == "jpg" && reason.contains("NoSuchApp")
        ));
        assert!(registry.type_default("public.png").is_some());
        assert!(registry.type_default("public.jpeg").is_none());
        assert!(registry.type_default("com.compuserve.gif").is_some());
    }

    #[test]
    fn test_strict_mode_aborts_at_missing_application() {
        let (runner, registry, _temp) = runner(Harness::new());
        let report = runner.run(&image_rules(), false);

        assert_eq!(report.applied_count(), 1);
        let failure = report.failure.as_ref().unwrap();
        assert_eq!(failure.rule.key, "jpg");
        assert_eq!(failure.stage, Stage::AppResolution);
        assert!(matches!(failure.error, InfatError::ApplicationNotFound { .. }));

        // Rule 1 stays applied, rule 3 is never attempted
        assert!(registry.type_default("public.png").is_some());
        assert!(
            registry
                .calls()
                .iter()
                .all(|call| !call.contains("com.compuserve.gif"))
        );
    }

    #[test]
    fn test_robust_mode_still_aborts_on_other_errors() {
        let (runner, registry, _temp) = runner(Harness::new());
        let rules = vec![
            AssociationRule::new(AssociationKind::Extension, "png", "Preview"),
            AssociationRule::new(AssociationKind::Supertype, "no-such-type", "Preview"),
            AssociationRule::new(AssociationKind::Scheme, "mailto", "Preview"),
        ];
        let report = runner.run(&rules, true);

        let failure = report.failure.unwrap();
        assert!(matches!(failure.error, InfatError::InvalidSupertype { .. }));
        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(registry.scheme_handler("mailto"), None);
    }

    #[test]
    fn test_registry_failure_is_never_skipped() {
        let (runner, _registry, _temp) = runner(Harness::with_registry(
            FakeRegistry::new().with_modern(ModernBehavior::Fail(OsError::new(
                OsError::COCOA_DOMAIN,
                257,
                "permission denied",
            ))),
        ));
        let report = runner.run(&image_rules(), true);

        let failure = report.failure.unwrap();
        assert_eq!(failure.stage, Stage::Application);
        assert!(report.outcomes.is_empty());
    }

    #[test]
    fn test_processing_order_is_extensions_types_schemes() {
        let (runner, registry, _temp) = runner(Harness::new());
        let rules = vec![
            AssociationRule::new(AssociationKind::Scheme, "mailto", "Preview"),
            AssociationRule::new(AssociationKind::Supertype, "plain-text", "Preview"),
            AssociationRule::new(AssociationKind::Extension, "png", "Preview"),
            AssociationRule::new(AssociationKind::Extension, "gif", "Preview"),
        ];
        let report = runner.run(&rules, false);

        let keys: Vec<_> = report.applied().map(|b| b.rule.key.as_str()).collect();
        assert_eq!(keys, vec!["png", "gif", "plain-text", "mailto"]);
        let calls = registry.calls();
        assert!(calls[0].starts_with("modern:public.png"));
        assert!(calls.last().unwrap().starts_with("scheme:mailto"));
    }

    #[test]
    fn test_empty_rule_set_is_an_empty_report() {
        let (runner, registry, _temp) = runner(Harness::new());
        let report = runner.run(&[], false);

        assert!(report.outcomes.is_empty());
        assert!(!report.is_aborted());
        assert!(registry.calls().is_empty());
    }

    #[test]
    fn test_rerunning_a_batch_is_idempotent() {
        let (runner, registry, _temp) = runner(Harness::new());
        let rules = vec![
            AssociationRule::new(AssociationKind::Extension, "png", "Preview"),
            AssociationRule::new(AssociationKind::Scheme, "mailto", "Preview"),
        ];
        runner.run(&rules, false);
        let first = (
            registry.type_default("public.png"),
            registry.scheme_handler("mailto"),
        );
        let report = runner.run(&rules, false);

        assert!(!report.is_aborted());
        assert_eq!(
            (
                registry.type_default("public.png"),
                registry.scheme_handler("mailto")
            ),
            first
        );
    }
}
