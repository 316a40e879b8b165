use crate::core::{UigenError, UigenResult};
use crate::substitution::SubstitutionMap;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Counts of entries written by one instantiation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstantiateStats {
    pub files: usize,
    pub directories: usize,
}

/// Mirrors a template tree with every token substituted
pub struct Instantiator<'a> {
    substitutions: &'a SubstitutionMap,
}

impl<'a> Instantiator<'a> {
    pub fn new(substitutions: &'a SubstitutionMap) -> Self {
        Self { substitutions }
    }

    /// Destination name for one template entry
    ///
    /// On Unix, names that are not UTF-8 are substituted on their raw bytes,
    /// so invalid byte runs come through untouched.
    pub fn target_name(&self, name: &OsStr) -> UigenResult<OsString> {
        let rendered = match name.to_str() {
            Some(s) => OsString::from(self.substitutions.apply(s)),
            None => self.target_name_raw(name)?,
        };

        let check = rendered.to_string_lossy();
        if check.is_empty() || check == "." || check == ".." || check.contains(['/', '\\']) {
            return Err(UigenError::InvalidSubstitution(format!(
                "'{}' renders to '{}', which is not a single file name",
                name.to_string_lossy(),
                check
            )));
        }

        Ok(rendered)
    }

    #[cfg(unix)]
    fn target_name_raw(&self, name: &OsStr) -> UigenResult<OsString> {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        Ok(OsString::from_vec(
            self.substitutions.apply_bytes(name.as_bytes()),
        ))
    }

    #[cfg(not(unix))]
    fn target_name_raw(&self, name: &OsStr) -> UigenResult<OsString> {
        // Only a lossy rendering is available here, which would rename the entry
        if self.substitutions.matches(&name.to_string_lossy()) {
            return Err(UigenError::InvalidSubstitution(format!(
                "'{}' is not valid Unicode and cannot be substituted",
                name.to_string_lossy()
            )));
        }
        Ok(name.to_os_string())
    }

    /// Direct entries of `dir`, sorted by name
    pub(crate) fn entries(dir: &Path) -> UigenResult<Vec<(PathBuf, OsString)>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            entries.push((entry.path(), entry.file_name()));
        }
        entries.sort_by(|a, b| a.1.cmp(&b.1));
        Ok(entries)
    }

    /// Render the contents of `source` into the already-created `target`
    pub fn render_directory(
        &self,
        source: &Path,
        target: &Path,
        stats: &mut InstantiateStats,
    ) -> UigenResult<()> {
        for (source_path, file_name) in Self::entries(source)? {
            let target_path = target.join(self.target_name(&file_name)?);

            // Follows symlinks, so a linked directory is copied as a directory
            if fs::metadata(&source_path)?.is_dir() {
                fs::create_dir(&target_path)?;
                stats.directories += 1;
                debug!("Created directory {}", target_path.display());
                self.render_directory(&source_path, &target_path, stats)?;
            } else {
                self.render_file(&source_path, &target_path)?;
                stats.files += 1;
            }
        }

        Ok(())
    }

    fn render_file(&self, source: &Path, target: &Path) -> UigenResult<()> {
        let content = fs::read(source)?;

        match String::from_utf8(content) {
            Ok(text) => {
                let rendered = self.substitutions.apply(&text);
                fs::write(target, rendered)?;
                debug!("Rendered {} -> {}", source.display(), target.display());
            }
            Err(e) => {
                // Not text, copy as-is
                fs::write(target, e.into_bytes())?;
                debug!("Copied binary {} -> {}", source.display(), target.display());
            }
        }

        copy_executable_bits(source, target)
    }
}

/// Carry the executable bits over; everything else keeps the default mode
///
/// Generated files stay writable even when the template is read-only.
#[cfg(unix)]
fn copy_executable_bits(source: &Path, target: &Path) -> UigenResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let executable = fs::metadata(source)?.permissions().mode() & 0o111;
    if executable != 0 {
        let mut perms = fs::metadata(target)?.permissions();
        perms.set_mode(perms.mode() | executable);
        fs::set_permissions(target, perms)?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn copy_executable_bits(_source: &Path, _target: &Path) -> UigenResult<()> {
    Ok(())
}

/// Instantiate `template_dir` into a new `dest_dir`, writing in place
///
/// Fails with `AlreadyExists` before any write if `dest_dir` is present. A
/// failure part-way through leaves the partial tree behind; use
/// [`instantiate_staged`](super::instantiate_staged) to avoid that.
pub fn instantiate(
    template_dir: &Path,
    dest_dir: &Path,
    substitutions: &SubstitutionMap,
) -> UigenResult<InstantiateStats> {
    super::preflight(template_dir, dest_dir)?;

    fs::create_dir(dest_dir)?;
    let mut stats = InstantiateStats::default();
    Instantiator::new(substitutions).render_directory(template_dir, dest_dir, &mut stats)?;

    info!(
        "Instantiated {} into {} ({} files, {} directories)",
        template_dir.display(),
        dest_dir.display(),
        stats.files,
        stats.directories
    );
    Ok(stats)
}
