//! Info command implementation

use tracing::{Span, debug, info_span};

use super::exactly_one;
use crate::app::ApplicationLocator;
use crate::app::manifest::BundleManifest;
use crate::cli::InfoArgs;
use crate::error::Result;
use crate::platform::{self, AssociationRegistry};
use crate::uti::{TypeIdentifier, TypeResolver};
use crate::ui;

/// Run info command
pub fn run(args: &InfoArgs) -> Result<()> {
    let (flag, value) = exactly_one(&[
        ("--app", args.app.as_deref()),
        ("--ext", args.ext.as_deref()),
        ("--type", args.supertype.as_deref()),
        ("--scheme", args.scheme.as_deref()),
    ])?;
    let span = info_span!("info", flag, value);
    let locator = ApplicationLocator::system(info_span!(parent: &span, "locator"));

    if flag == "--app" {
        let app = locator.resolve(value)?;
        let manifest = BundleManifest::read(&app.location)?;
        ui::display_app_info(&app, &manifest);
        return Ok(());
    }

    let services = platform::system()?;
    let resolver = TypeResolver::new(services.types.clone(), info_span!(parent: &span, "types"));
    let registry = services.registry.as_ref();

    match flag {
        "--ext" => {
            let content_type = resolver.from_extension(value)?;
            let label = format!(".{}", value.trim_start_matches('.'));
            show_type(&label, &content_type, registry, &locator, &span);
        }
        "--type" => {
            let content_type = resolver.from_supertype_key(value)?;
            show_type(value, &content_type, registry, &locator, &span);
        }
        _ => {
            let scheme = resolver.resolve_scheme(value)?;
            let default = registry
                .default_handler_for_scheme(&scheme)
                .map(|id| describe_handler(&locator, &id, &span));
            let handlers =
                describe_handlers(&locator, registry.handlers_for_scheme(&scheme), &span);
            ui::display_scheme_info(&scheme, default.as_deref(), &handlers);
        }
    }
    Ok(())
}

fn show_type(
    label: &str,
    content_type: &TypeIdentifier,
    registry: &dyn AssociationRegistry,
    locator: &ApplicationLocator,
    span: &Span,
) {
    let default = registry
        .default_handler_for_type(&content_type.identifier)
        .map(|id| describe_handler(locator, &id, span));
    let handlers = describe_handlers(
        locator,
        registry.handlers_for_type(&content_type.identifier),
        span,
    );
    ui::display_type_info(label, content_type, default.as_deref(), &handlers);
}

fn describe_handlers(
    locator: &ApplicationLocator,
    bundle_ids: Vec<String>,
    span: &Span,
) -> Vec<String> {
    bundle_ids
        .iter()
        .map(|id| describe_handler(locator, id, span))
        .collect()
}

/// `Name (bundle.id)` when the bundle is installed, otherwise the bare id
fn describe_handler(locator: &ApplicationLocator, bundle_id: &str, span: &Span) -> String {
    match locator.find_by_bundle_id(bundle_id) {
        Ok(Some(app)) => format!("{} ({bundle_id})", app.name),
        Ok(None) => bundle_id.to_string(),
        Err(e) => {
            debug!(parent: span, bundle_id, error = %e, "Handler lookup failed");
            bundle_id.to_string()
        }
    }
}
