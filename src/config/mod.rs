//! Configuration handling for Infat
//!
//! This module contains:
//! - `config.toml` - the association file ([`Config`])
//! - XDG search paths for locating it ([`paths`])
//! - Importing the current Launch Services handlers ([`launch_services`])

pub mod file;
pub mod launch_services;
pub mod paths;

// Re-export commonly used types
pub use file::{Config, RuleTable};
