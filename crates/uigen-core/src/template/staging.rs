use super::instantiator::{InstantiateStats, Instantiator};
use crate::core::path::{parent_dir, staging_prefix};
use crate::core::{UigenError, UigenResult};
use crate::substitution::SubstitutionMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Instantiate into a hidden sibling directory, then rename it onto `dest_dir`
///
/// `dest_dir` only appears once the whole tree has been written. The staging
/// directory is removed whether or not the walk succeeds, and errors are
/// returned unchanged.
pub fn instantiate_staged(
    template_dir: &Path,
    dest_dir: &Path,
    substitutions: &SubstitutionMap,
) -> UigenResult<InstantiateStats> {
    super::preflight(template_dir, dest_dir)?;

    let staging = tempfile::Builder::new()
        .prefix(&staging_prefix(dest_dir))
        .tempdir_in(parent_dir(dest_dir))?;
    debug!("Staging {} in {}", dest_dir.display(), staging.path().display());

    // Built one level down so the tree gets a normally created root, not the
    // private mode of the temporary directory
    let staged_root = staging.path().join("component");
    let mut stats = InstantiateStats::default();
    let rendered = fs::create_dir(&staged_root)
        .map_err(UigenError::from)
        .and_then(|()| {
            Instantiator::new(substitutions).render_directory(
                template_dir,
                &staged_root,
                &mut stats,
            )
        })
        .and_then(|()| fs::rename(&staged_root, dest_dir).map_err(UigenError::from));

    // Empty after a successful rename, partial after a failure; removed either way
    let staging_path = staging.path().to_path_buf();
    if let Err(cleanup) = staging.close() {
        warn!(
            "Failed to remove staging directory {}: {}",
            staging_path.display(),
            cleanup
        );
    }
    rendered?;

    info!(
        "Instantiated {} into {} ({} files, {} directories)",
        template_dir.display(),
        dest_dir.display(),
        stats.files,
        stats.directories
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::ComponentName;
    use crate::substitution::Tokens;
    use tempfile::TempDir;

    fn input_map() -> SubstitutionMap {
        let name = ComponentName::parse("input").unwrap();
        SubstitutionMap::for_component(&name, &Tokens::default()).unwrap()
    }

    fn leftovers(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|n| n.contains(".uigen-"))
            .collect()
    }

    #[test]
    fn test_staged_success_leaves_no_staging_dir() {
        let temp = TempDir::new().unwrap();
        let template = temp.path().join("__template__");
        fs::create_dir_all(template.join("src")).unwrap();
        fs::write(template.join("src").join("__component__.vue"), "__COMPONENT__").unwrap();

        let dest = temp.path().join("input");
        let stats = instantiate_staged(&template, &dest, &input_map()).unwrap();

        assert_eq!(stats.files, 1);
        assert_eq!(
            fs::read_to_string(dest.join("src").join("input.vue")).unwrap(),
            "Input"
        );
        assert!(leftovers(temp.path()).is_empty());
    }

    #[test]
    fn test_staged_failure_removes_everything() {
        let temp = TempDir::new().unwrap();
        let template = temp.path().join("__template__");
        fs::create_dir_all(&template).unwrap();
        fs::write(template.join("a.ts"), "__COMPONENT__").unwrap();
        // Renders to "in/put.ts", which cannot be a single file name
        fs::write(template.join("__x__.ts"), "").unwrap();

        let subs = SubstitutionMap::new(vec![
            ("__COMPONENT__".to_string(), "Input".to_string()),
            ("__x__".to_string(), "in/put".to_string()),
        ])
        .unwrap();

        let dest = temp.path().join("input");
        let result = instantiate_staged(&template, &dest, &subs);

        assert!(matches!(result, Err(UigenError::InvalidSubstitution(_))));
        assert!(!dest.exists());
        assert!(leftovers(temp.path()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_staged_failure_after_read_only_dir_cleans_up() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let template = temp.path().join("__template__");
        let locked = template.join("a");
        fs::create_dir_all(&locked).unwrap();
        fs::write(locked.join("f.ts"), "__COMPONENT__").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();
        // Sorted after "a", so the read-only copy is finished before this fails
        fs::write(template.join("z__x__.ts"), "").unwrap();

        let subs = SubstitutionMap::new(vec![
            ("__COMPONENT__".to_string(), "Input".to_string()),
            ("__x__".to_string(), "in/put".to_string()),
        ])
        .unwrap();

        let dest = temp.path().join("input");
        let result = instantiate_staged(&template, &dest, &subs);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(matches!(result, Err(UigenError::InvalidSubstitution(_))));
        assert!(!dest.exists());
        assert!(leftovers(temp.path()).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_staged_root_has_default_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let template = temp.path().join("__template__");
        fs::create_dir_all(&template).unwrap();
        fs::write(template.join("index.ts"), "").unwrap();
        let sibling = temp.path().join("button");
        fs::create_dir(&sibling).unwrap();

        let dest = temp.path().join("input");
        instantiate_staged(&template, &dest, &input_map()).unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&dest), mode(&sibling));
    }

    #[test]
    fn test_staged_missing_template() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("input");

        let result = instantiate_staged(&temp.path().join("missing"), &dest, &input_map());

        assert!(matches!(result, Err(UigenError::TemplateNotFound(_))));
        assert!(!dest.exists());
        assert!(leftovers(temp.path()).is_empty());
    }
}
