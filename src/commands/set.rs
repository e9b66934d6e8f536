//! Set command implementation
//!
//! Binds a single rule through the same pipeline the config uses, routing
//! overrides included.

use tracing::info_span;

use super::{GlobalOptions, exactly_one};
use crate::association::{AssociationKind, AssociationRule, Associator};
use crate::cli::SetArgs;
use crate::error::Result;
use crate::platform;
use crate::ui;

/// Turn the arguments into a rule, rejecting zero or several targets
pub fn rule_from_args(args: &SetArgs) -> Result<AssociationRule> {
    let (flag, key) = exactly_one(&[
        ("--ext", args.ext.as_deref()),
        ("--scheme", args.scheme.as_deref()),
        ("--type", args.supertype.as_deref()),
    ])?;
    let kind = match flag {
        "--ext" => AssociationKind::Extension,
        "--scheme" => AssociationKind::Scheme,
        _ => AssociationKind::Supertype,
    };
    Ok(AssociationRule::new(kind, key, args.app.as_str()))
}

/// Run set command
pub fn run(options: &GlobalOptions, args: &SetArgs) -> Result<()> {
    let rule = rule_from_args(args)?;

    let services = platform::system()?;
    let span = info_span!("set", rule = %rule.label());
    let associator = Associator::for_system(&services, options.timeout, &span);
    let binding = associator.apply(&rule)?;

    ui::display_binding(&binding);
    Ok(())
}
