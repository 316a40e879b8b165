use super::instantiator::Instantiator;
use crate::core::UigenResult;
use crate::substitution::SubstitutionMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One entry an instantiation would create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    pub source: PathBuf,
    pub target: PathBuf,
    pub kind: EntryKind,
}

/// Compute what `instantiate` would write, without writing anything
///
/// Entries come back depth-first, each directory before its contents.
pub fn plan(
    template_dir: &Path,
    dest_dir: &Path,
    substitutions: &SubstitutionMap,
) -> UigenResult<Vec<PlannedEntry>> {
    super::preflight(template_dir, dest_dir)?;

    let mut entries = Vec::new();
    plan_directory(
        &Instantiator::new(substitutions),
        template_dir,
        dest_dir,
        &mut entries,
    )?;
    Ok(entries)
}

fn plan_directory(
    instantiator: &Instantiator<'_>,
    source: &Path,
    target: &Path,
    entries: &mut Vec<PlannedEntry>,
) -> UigenResult<()> {
    for (source_path, file_name) in Instantiator::entries(source)? {
        let target_path = target.join(instantiator.target_name(&file_name)?);

        if fs::metadata(&source_path)?.is_dir() {
            entries.push(PlannedEntry {
                source: source_path.clone(),
                target: target_path.clone(),
                kind: EntryKind::Directory,
            });
            plan_directory(instantiator, &source_path, &target_path, entries)?;
        } else {
            entries.push(PlannedEntry {
                source: source_path,
                target: target_path,
                kind: EntryKind::File,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UigenError;
    use crate::naming::ComponentName;
    use crate::substitution::Tokens;
    use tempfile::TempDir;

    #[test]
    fn test_plan_lists_targets_without_writing() {
        let temp = TempDir::new().unwrap();
        let template = temp.path().join("tpl");
        fs::create_dir_all(template.join("src")).unwrap();
        fs::write(template.join("index.ts"), "").unwrap();
        fs::write(template.join("src").join("__component__.vue"), "").unwrap();

        let name = ComponentName::parse("dialog").unwrap();
        let subs = SubstitutionMap::for_component(&name, &Tokens::default()).unwrap();
        let dest = temp.path().join("dialog");

        let planned = plan(&template, &dest, &subs).unwrap();

        assert!(!dest.exists());
        let targets: Vec<_> = planned
            .iter()
            .map(|e| (e.target.strip_prefix(&dest).unwrap().to_path_buf(), e.kind))
            .collect();
        assert_eq!(
            targets,
            vec![
                (PathBuf::from("index.ts"), EntryKind::File),
                (PathBuf::from("src"), EntryKind::Directory),
                (PathBuf::from("src").join("dialog.vue"), EntryKind::File),
            ]
        );
    }

    #[test]
    fn test_plan_reports_existing_destination() {
        let temp = TempDir::new().unwrap();
        let template = temp.path().join("tpl");
        fs::create_dir_all(&template).unwrap();
        let dest = temp.path().join("dialog");
        fs::create_dir_all(&dest).unwrap();

        let name = ComponentName::parse("dialog").unwrap();
        let subs = SubstitutionMap::for_component(&name, &Tokens::default()).unwrap();

        assert!(matches!(
            plan(&template, &dest, &subs),
            Err(UigenError::AlreadyExists { .. })
        ));
    }
}
