//! Init command implementation
//!
//! Writes a config that reproduces the associations currently stored in the
//! user's Launch Services database.

use std::path::Path;

use console::Style;
use inquire::Confirm;
use tracing::info_span;

use super::GlobalOptions;
use crate::app::ApplicationLocator;
use crate::cli::InitArgs;
use crate::config::launch_services::{self, config_from_handlers, read_handlers};
use crate::config::paths;
use crate::error::{Result, config};

/// Run init command
pub fn run(options: &GlobalOptions, args: &InitArgs) -> Result<()> {
    let output = match args.output.as_ref().or(options.config.as_ref()) {
        Some(path) => path.clone(),
        None => paths::default_config_path()?,
    };

    let database = launch_services::default_handlers_path()
        .ok_or_else(|| config::launch_services_read("~", "home directory not found"))?;
    let handlers = read_handlers(&database)?;

    let span = info_span!("init", output = %output.display());
    let locator = ApplicationLocator::system(info_span!(parent: &span, "locator"));
    let imported = config_from_handlers(&handlers, &locator, options.robust, &span)?;

    if output.exists() && !args.force && !confirm_overwrite(&output)? {
        println!("{}", Style::new().dim().apply_to("Nothing written"));
        return Ok(());
    }

    imported.to_file(&output)?;
    println!(
        "{} Wrote {} associations to {}",
        Style::new().green().bold().apply_to("✓"),
        imported.rules().len(),
        Style::new().bold().apply_to(output.display())
    );
    Ok(())
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    Ok(Confirm::new(&format!("{} already exists. Overwrite?", path.display()))
        .with_default(false)
        .with_help_message("Use --force to skip this question")
        .prompt()?)
}
