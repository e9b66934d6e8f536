//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Infat - declarative file associations for macOS
///
/// Bind applications to file extensions, URL schemes and content types from a
/// single TOML file.
#[derive(Parser, Debug)]
#[command(
    name = "infat",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Declaratively manage macOS file associations and URL scheme handlers",
    long_about = "Infat binds applications to file extensions, URL schemes and broad content \
                  types (supertypes) from a TOML config, or one at a time with 'infat set'.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  infat\n    \
                  infat --config ~/dotfiles/infat.toml --robust\n    \
                  infat set Zed --ext md\n    \
                  infat set Mail --scheme mailto\n    \
                  infat info --ext png\n    \
                  infat init\n\n\
                  \x1b[1m\x1b[32mConfig:\x1b[0m\n    \
                  $XDG_CONFIG_HOME/infat/config.toml"
)]
pub struct Cli {
    /// Path to the config file (defaults to the XDG search path)
    #[arg(long, short = 'c', global = true, env = "INFAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip rules whose application is not installed instead of aborting
    #[arg(long, global = true)]
    pub robust: bool,

    /// Seconds to wait for the system to confirm a binding
    #[arg(
        long,
        global = true,
        value_name = "SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply every association in the config (default)
    Apply,

    /// Bind one application to an extension, scheme or type
    Set(SetArgs),

    /// Show what an application, extension, type or scheme resolves to
    Info(InfoArgs),

    /// Write a config from the current associations
    Init(InitArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the set command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Open markdown files with Zed:\n    infat set Zed --ext md\n\n\
                  Make Mail the mailto handler:\n    infat set Mail --scheme mailto\n\n\
                  Open all plain text with Zed:\n    infat set Zed --type plain-text\n\n\
                  Use a full path:\n    infat set /Applications/Zed.app --ext rs")]
pub struct SetArgs {
    /// Application name, bundle path or bundle identifier
    pub app: String,

    /// File extension (without the dot)
    #[arg(long)]
    pub ext: Option<String>,

    /// URL scheme
    #[arg(long)]
    pub scheme: Option<String>,

    /// Supertype key such as plain-text or image
    #[arg(long = "type", value_name = "KEY")]
    pub supertype: Option<String>,
}

/// Arguments for the info command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show an application's declared types:\n    infat info --app Preview\n\n\
                  Show who opens .png files:\n    infat info --ext png\n\n\
                  Show the default browser:\n    infat info --scheme http\n\n\
                  Show a supertype:\n    infat info --type source-code")]
pub struct InfoArgs {
    /// Application name, bundle path or bundle identifier
    #[arg(long)]
    pub app: Option<String>,

    /// File extension
    #[arg(long)]
    pub ext: Option<String>,

    /// Supertype key
    #[arg(long = "type", value_name = "KEY")]
    pub supertype: Option<String>,

    /// URL scheme
    #[arg(long)]
    pub scheme: Option<String>,
}

/// Arguments for the init command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Write the default config:\n    infat init\n\n\
                  Write somewhere else:\n    infat init --output ./infat.toml\n\n\
                  Overwrite without asking:\n    infat init --force")]
pub struct InitArgs {
    /// Where to write the config (defaults to $XDG_CONFIG_HOME/infat/config.toml)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file without asking
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Arguments for the completions command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    infat completions --shell bash > ~/.bash_completion.d/infat\n\n\
                  Generate zsh completions:\n    infat completions --shell zsh > ~/.zfunc/_infat\n\n\
                  Generate fish completions:\n    infat completions --shell fish > ~/.config/fish/completions/infat.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long, short = 's')]
    pub shell: String,
}
