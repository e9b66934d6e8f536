//! Apply command implementation
//!
//! Loads the config, then runs every rule through the batch runner. The
//! config is validated before the OS services are touched, so a broken file
//! is reported the same way on every host.

use tracing::info_span;

use super::GlobalOptions;
use crate::association::Associator;
use crate::batch::BatchRunner;
use crate::config::{Config, paths};
use crate::error::Result;
use crate::platform;
use crate::ui;

/// Run apply command
pub fn run(options: &GlobalOptions) -> Result<()> {
    let path = match &options.config {
        Some(path) => path.clone(),
        None => paths::find_config()?,
    };
    let span = info_span!("apply", config = %path.display());
    let config = Config::load(&path, &info_span!(parent: &span, "config"))?;
    let rules = config.rules();

    let services = platform::system()?;
    let associator = Associator::for_system(&services, options.timeout, &span);
    let report = BatchRunner::new(associator, span).run(&rules, options.robust);

    ui::display_report(&report);

    match report.failure {
        Some(failure) => Err(failure.into()),
        None => Ok(()),
    }
}
