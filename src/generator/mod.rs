//! Component generation: turn a component name into a new component folder.

use crate::config::Config;
use crate::core::{UigenError, UigenResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use uigen_core::template::{self, EntryKind, InstantiateStats, PlannedEntry};
use uigen_core::{ComponentName, SubstitutionMap};

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Compute the layout but write nothing
    pub dry_run: bool,
    /// Override the configured staging behaviour
    pub staged: Option<bool>,
}

/// Outcome of one generation
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub pascal_name: String,
    pub destination: PathBuf,
    /// Destination relative to the project root, for display
    pub relative_destination: PathBuf,
    pub stats: InstantiateStats,
    /// Populated only for dry runs
    pub planned: Vec<PlannedEntry>,
}

/// Generates components inside one project
pub struct Generator {
    project_root: PathBuf,
    config: Config,
}

impl Generator {
    pub fn new(project_root: PathBuf, config: Config) -> Self {
        Self {
            project_root,
            config,
        }
    }

    /// Load uigen.yaml from `project_root` and build a generator for it
    pub fn load(project_root: PathBuf) -> UigenResult<Self> {
        let config = Config::load(&project_root)?;
        Ok(Self::new(project_root, config))
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn components_root(&self) -> PathBuf {
        self.config.components_root(&self.project_root)
    }

    pub fn template_dir(&self) -> PathBuf {
        self.config.template_dir(&self.project_root)
    }

    /// Create `<components root>/<name>` from the template
    pub fn generate(&self, name: &str, options: GenerateOptions) -> UigenResult<GenerateReport> {
        let name = ComponentName::parse(name)?;
        let pascal_name = name.pascal();
        let substitutions = SubstitutionMap::for_component(&name, &self.config.tokens())?;

        let template_dir = self.template_dir();
        let destination = self.components_root().join(name.raw());
        let relative_destination = pathdiff::diff_paths(&destination, &self.project_root)
            .unwrap_or_else(|| destination.clone());

        let in_use = |e: UigenError| match e {
            UigenError::AlreadyExists { path, .. } => UigenError::AlreadyExists {
                name: pascal_name.clone(),
                path,
            },
            other => other,
        };

        if options.dry_run {
            let planned =
                template::plan(&template_dir, &destination, &substitutions).map_err(in_use)?;
            let stats = count(&planned);
            return Ok(GenerateReport {
                pascal_name,
                destination,
                relative_destination,
                stats,
                planned,
            });
        }

        let staged = options.staged.unwrap_or(self.config.staged);
        let stats = if staged {
            template::instantiate_staged(&template_dir, &destination, &substitutions)
        } else {
            template::instantiate(&template_dir, &destination, &substitutions)
        }
        .map_err(in_use)?;

        info!(
            "Generated component {} at {}",
            pascal_name,
            relative_destination.display()
        );

        Ok(GenerateReport {
            pascal_name,
            destination,
            relative_destination,
            stats,
            planned: Vec::new(),
        })
    }

    /// Names of existing component folders, sorted, excluding the template
    pub fn list_components(&self) -> UigenResult<Vec<String>> {
        let root = self.components_root();
        if !root.is_dir() {
            return Err(UigenError::Path(format!(
                "Components directory not found: {}",
                root.display()
            )));
        }

        let mut components = Vec::new();
        for entry in fs::read_dir(&root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if name == self.config.template || name.starts_with('.') {
                continue;
            }
            components.push(name);
        }

        components.sort();
        Ok(components)
    }
}

fn count(planned: &[PlannedEntry]) -> InstantiateStats {
    planned
        .iter()
        .fold(InstantiateStats::default(), |mut stats, entry| {
            match entry.kind {
                EntryKind::Directory => stats.directories += 1,
                EntryKind::File => stats.files += 1,
            }
            stats
        })
}
