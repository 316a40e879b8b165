//! Component names and the case variants derived from them.

use crate::core::{UigenError, UigenResult};
use std::fmt;

/// A validated, user-supplied component name
///
/// The raw form becomes the component folder name, so it must be a single
/// normal path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName {
    raw: String,
}

impl ComponentName {
    pub fn parse(name: &str) -> UigenResult<Self> {
        if name.trim().is_empty() {
            return Err(UigenError::InvalidName(
                "component name cannot be empty".to_string(),
            ));
        }

        if name == "." || name == ".." {
            return Err(UigenError::InvalidName(format!(
                "'{}' is not a folder name",
                name
            )));
        }

        if name.contains(['/', '\\']) {
            return Err(UigenError::InvalidName(format!(
                "'{}' must not contain path separators",
                name
            )));
        }

        if name.contains('\0') {
            return Err(UigenError::InvalidName(format!(
                "{:?} must not contain NUL characters",
                name
            )));
        }

        Ok(Self {
            raw: name.to_string(),
        })
    }

    /// The name exactly as given, used for file names and tags
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The name with only its first character upper-cased, used for symbols
    pub fn pascal(&self) -> String {
        upper_first(&self.raw)
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Upper-case the first character and leave the rest untouched
///
/// Not title-casing: `date-picker` becomes `Date-picker`.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
