use crate::core::error::{UigenError, UigenResult};
use std::path::{Path, PathBuf};

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "uigen.yaml";

/// Get the config file path for a project root (./uigen.yaml)
pub fn config_file(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Find the project root by looking for uigen.yaml or package.json
///
/// uigen.yaml wins over package.json when both exist in the same directory;
/// the nearest directory containing either one is the root.
pub fn find_project_root(start: &Path) -> UigenResult<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if config_file(&current).exists() || current.join("package.json").exists() {
            return Ok(current);
        }

        if let Some(parent) = current.parent() {
            current = parent.to_path_buf();
        } else {
            return Err(UigenError::Path(
                "Could not find uigen.yaml or package.json in current directory or parents"
                    .to_string(),
            ));
        }
    }
}

/// Get the hidden staging path prefix used while building `dest`
///
/// `packages/components/select` stages under `packages/components/.select.uigen-`.
pub fn staging_prefix(dest: &Path) -> String {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!(".{}.uigen-", name)
}

/// Parent directory of `dest`, treating a bare relative name as living in `.`
pub fn parent_dir(dest: &Path) -> &Path {
    match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
