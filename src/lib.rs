//! uigen: scaffold UI components from a template folder
//!
//! This crate re-exports the template engine from `uigen-core` and adds the
//! project-level pieces: configuration discovery and the component generator.

pub use uigen_core::{format_error_with_help, ErrorHelp, UigenError, UigenResult};
pub use uigen_core::{ComponentName, SubstitutionMap, Tokens};

/// Core module re-exported from uigen-core.
pub mod core {
    pub use uigen_core::core::*;
}

/// Template instantiation re-exported from uigen-core.
pub mod template {
    pub use uigen_core::template::*;
}

/// Project configuration (uigen.yaml).
pub mod config;

/// Component generation.
pub mod generator;
