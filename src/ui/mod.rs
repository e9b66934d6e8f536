//! Terminal presentation layer
//!
//! Results go to stdout through these functions; diagnostics go to stderr
//! through `tracing`.

pub mod display;

pub use display::{
    display_app_info, display_binding, display_report, display_scheme_info, display_type_info,
};
