//! Display functions for bindings, batch reports and lookups

use console::Style;

use crate::app::ApplicationRecord;
use crate::app::manifest::BundleManifest;
use crate::association::{Binding, RuleFailure};
use crate::batch::{BatchReport, RuleOutcome};
use crate::uti::TypeIdentifier;

macro_rules! display_opt_field {
    ($label:expr, $value:expr) => {
        if let Some(ref v) = $value {
            println!("  {} {}", Style::new().bold().apply_to($label), v);
        }
    };
}

/// `✓ .png → Preview`, noting a routed target
pub fn display_binding(binding: &Binding) {
    let check = Style::new().green().bold().apply_to("✓");
    let app = Style::new().bold().apply_to(&binding.app.name);
    if binding.was_rerouted() {
        println!(
            "{check} {} → {app} {}",
            binding.rule.label(),
            Style::new()
                .dim()
                .apply_to(format!("(routed to {}://)", binding.routed_key))
        );
    } else {
        println!("{check} {} → {app}", binding.rule.label());
    }
}

pub fn display_outcome(outcome: &RuleOutcome) {
    match outcome {
        RuleOutcome::Applied(binding) => display_binding(binding),
        RuleOutcome::Skipped { rule, reason } => println!(
            "{} {} → {} {}",
            Style::new().yellow().bold().apply_to("↷"),
            rule.label(),
            rule.app_name,
            Style::new().dim().apply_to(format!("(skipped: {reason})"))
        ),
    }
}

fn display_failure(failure: &RuleFailure) {
    println!(
        "{} {} → {} {}",
        Style::new().red().bold().apply_to("✗"),
        failure.rule.label(),
        failure.rule.app_name,
        Style::new()
            .dim()
            .apply_to(format!("(failed during {})", failure.stage))
    );
}

/// Every completed rule, the aborting rule if any, then a summary line
pub fn display_report(report: &BatchReport) {
    for outcome in &report.outcomes {
        display_outcome(outcome);
    }
    if let Some(failure) = &report.failure {
        display_failure(failure);
    }

    let mut summary = format!("{} applied", report.applied_count());
    if report.skipped_count() > 0 {
        summary.push_str(&format!(", {} skipped", report.skipped_count()));
    }
    if report.is_aborted() {
        summary.push_str(", aborted");
    }
    println!();
    println!("{}", Style::new().bold().apply_to(summary));
}

pub fn display_app_info(app: &ApplicationRecord, manifest: &BundleManifest) {
    println!("{}", Style::new().bold().yellow().apply_to(&app.name));
    println!("  {} {}", Style::new().bold().apply_to("Bundle ID:"), app.bundle_id);
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Path:"),
        app.location.display()
    );
    display_opt_field!("Version:", app.version);

    let document_types = manifest.document_types();
    if !document_types.is_empty() {
        println!("  {}", Style::new().bold().apply_to("Document types:"));
        for declared in &document_types {
            let mut tags: Vec<String> = declared.identifiers.clone();
            tags.extend(declared.extensions.iter().map(|ext| format!(".{ext}")));
            println!(
                "    - {} {}",
                Style::new().cyan().apply_to(&declared.name),
                Style::new().dim().apply_to(tags.join(", "))
            );
        }
    }

    let schemes = manifest.url_schemes();
    if !schemes.is_empty() {
        println!("  {}", Style::new().bold().apply_to("URL schemes:"));
        for scheme in &schemes {
            println!("    - {}", Style::new().cyan().apply_to(scheme));
        }
    }
}

pub fn display_type_info(
    label: &str,
    content_type: &TypeIdentifier,
    default_handler: Option<&str>,
    handlers: &[String],
) {
    println!("{}", Style::new().bold().yellow().apply_to(label));
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Identifier:"),
        content_type.identifier
    );
    display_opt_field!("MIME type:", content_type.preferred_mime_type);
    if !content_type.conforms_to.is_empty() {
        let parents: Vec<&str> = content_type.conforms_to.iter().map(String::as_str).collect();
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Conforms to:"),
            parents.join(", ")
        );
    }
    display_handlers(default_handler, handlers);
}

pub fn display_scheme_info(scheme: &str, default_handler: Option<&str>, handlers: &[String]) {
    println!("{}", Style::new().bold().yellow().apply_to(format!("{scheme}://")));
    display_handlers(default_handler, handlers);
}

fn display_handlers(default_handler: Option<&str>, handlers: &[String]) {
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Default:"),
        default_handler.map_or_else(
            || Style::new().dim().apply_to("None").to_string(),
            ToString::to_string
        )
    );
    if !handlers.is_empty() {
        println!("  {}", Style::new().bold().apply_to("Handlers:"));
        for handler in handlers {
            println!("    - {}", Style::new().cyan().apply_to(handler));
        }
    }
}
