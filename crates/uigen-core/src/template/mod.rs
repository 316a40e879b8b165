//! Template instantiation: mirror a template tree into a fresh destination,
//! substituting placeholder tokens in every entry name and file body.

pub mod instantiator;
pub mod plan;
pub mod staging;

pub use instantiator::{instantiate, InstantiateStats, Instantiator};
pub use plan::{plan, EntryKind, PlannedEntry};
pub use staging::instantiate_staged;

use crate::core::{UigenError, UigenResult};
use std::fs;
use std::path::Path;

/// Fail with `AlreadyExists` if anything (even a dangling symlink) sits at `dest`
pub(crate) fn check_destination(dest: &Path) -> UigenResult<()> {
    if fs::symlink_metadata(dest).is_ok() {
        let name = dest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dest.display().to_string());
        return Err(UigenError::AlreadyExists {
            name,
            path: dest.to_path_buf(),
        });
    }
    Ok(())
}

/// Fail with `TemplateNotFound` unless `template_dir` is a directory
pub(crate) fn check_template(template_dir: &Path) -> UigenResult<()> {
    match fs::metadata(template_dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        _ => Err(UigenError::TemplateNotFound(template_dir.to_path_buf())),
    }
}

/// Refuse destinations inside the template, which the walk would pick up again
pub(crate) fn check_not_nested(template_dir: &Path, dest: &Path) -> UigenResult<()> {
    let template = fs::canonicalize(template_dir)?;
    let parent = fs::canonicalize(crate::core::path::parent_dir(dest))?;
    if parent.starts_with(&template) {
        return Err(UigenError::Path(format!(
            "Destination {} is inside the template directory {}",
            dest.display(),
            template_dir.display()
        )));
    }
    Ok(())
}

/// All checks that must pass before the first write
pub(crate) fn preflight(template_dir: &Path, dest: &Path) -> UigenResult<()> {
    check_destination(dest)?;
    check_template(template_dir)?;
    check_not_nested(template_dir, dest)
}
