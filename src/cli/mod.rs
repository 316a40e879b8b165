pub mod generate;
pub mod list;

use std::env;
use std::path::PathBuf;
use uigen::core::path::find_project_root;
use uigen::core::{UigenError, UigenResult};
use uigen::generator::Generator;

/// Resolve the project root (explicit or discovered) and load its generator
pub fn load_generator(root: Option<PathBuf>) -> UigenResult<Generator> {
    let project_root = match root {
        Some(root) => root,
        None => {
            let current_dir = env::current_dir().map_err(|e| {
                UigenError::Path(format!("Failed to get current directory: {}", e))
            })?;
            find_project_root(&current_dir)?
        }
    };

    Generator::load(project_root)
}
