//! Infat - declarative file associations for macOS
//!
//! Binds applications to file extensions, URL schemes and broad content types
//! from a TOML config, using the system's Launch Services registry.

use clap::Parser;
use miette::Diagnostic;

mod app;
mod association;
mod batch;
mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod platform;
mod routing;
mod ui;
mod uti;

use cli::{Cli, Commands};
use commands::GlobalOptions;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    let options = GlobalOptions::from_cli(&cli);

    let result = match &cli.command {
        None | Some(Commands::Apply) => commands::apply::run(&options),
        Some(Commands::Set(args)) => commands::set::run(&options, args),
        Some(Commands::Info(args)) => commands::info::run(args),
        Some(Commands::Init(args)) => commands::init::run(&options, args),
        Some(Commands::Version) => commands::version::run(),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
