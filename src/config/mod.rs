use crate::core::path::config_file;
use crate::core::{UigenError, UigenResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uigen_core::substitution::{DEFAULT_PASCAL_TOKEN, DEFAULT_RAW_TOKEN};
use uigen_core::Tokens;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding every component folder, relative to the project root
    #[serde(default = "default_components_dir")]
    pub components_dir: PathBuf,

    /// Template folder name inside `components_dir`
    #[serde(default = "default_template")]
    pub template: String,

    /// Token replaced by the capitalized component name
    #[serde(default = "default_pascal_token")]
    pub pascal_token: String,

    /// Token replaced by the component name as given
    #[serde(default = "default_raw_token")]
    pub raw_token: String,

    /// Build into a hidden staging folder and rename on success
    #[serde(default = "default_true")]
    pub staged: bool,
}

fn default_components_dir() -> PathBuf {
    PathBuf::from("packages").join("components")
}

fn default_template() -> String {
    "__template__".to_string()
}

fn default_pascal_token() -> String {
    DEFAULT_PASCAL_TOKEN.to_string()
}

fn default_raw_token() -> String {
    DEFAULT_RAW_TOKEN.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            components_dir: default_components_dir(),
            template: default_template(),
            pascal_token: default_pascal_token(),
            raw_token: default_raw_token(),
            staged: true,
        }
    }
}

impl Config {
    /// Load uigen.yaml from the project root, falling back to defaults if absent
    pub fn load(project_root: &Path) -> UigenResult<Self> {
        let config_path = config_file(project_root);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a uigen.yaml document
    pub fn from_yaml(content: &str) -> UigenResult<Self> {
        // An empty file parses as YAML null, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(content)?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> UigenResult<()> {
        if self.pascal_token.is_empty() || self.raw_token.is_empty() {
            return Err(UigenError::Config(
                "Placeholder tokens cannot be empty".to_string(),
            ));
        }

        if self.pascal_token == self.raw_token {
            return Err(UigenError::Config(format!(
                "pascal_token and raw_token must differ (both are '{}')",
                self.pascal_token
            )));
        }

        if self.template.is_empty() || self.template.contains(['/', '\\']) {
            return Err(UigenError::Config(format!(
                "template must be a folder name inside components_dir, got '{}'",
                self.template
            )));
        }

        Ok(())
    }

    pub fn tokens(&self) -> Tokens {
        Tokens {
            pascal: self.pascal_token.clone(),
            raw: self.raw_token.clone(),
        }
    }

    /// Absolute components root for a project
    pub fn components_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.components_dir)
    }

    /// Absolute template directory for a project
    pub fn template_dir(&self, project_root: &Path) -> PathBuf {
        self.components_root(project_root).join(&self.template)
    }
}
