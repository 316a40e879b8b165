use std::path::PathBuf;
use thiserror::Error;

pub type UigenResult<T> = Result<T, UigenError>;

#[derive(Error, Debug)]
pub enum UigenError {
    #[error("Invalid component name: {0}")]
    InvalidName(String),

    #[error("Component {name} already exists at {}", .path.display())]
    AlreadyExists { name: String, path: PathBuf },

    #[error("Template directory not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid substitution: {0}")]
    InvalidSubstitution(String),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
