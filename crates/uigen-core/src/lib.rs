// Core functionality
pub mod core;

// Component names and substitution maps
pub mod naming;
pub mod substitution;

// Template instantiation
pub mod template;

// Re-export commonly used types
pub use crate::core::{format_error_with_help, ErrorHelp, UigenError, UigenResult};
pub use naming::ComponentName;
pub use substitution::{SubstitutionMap, Tokens};
pub use template::{instantiate, instantiate_staged, plan, EntryKind, PlannedEntry};
