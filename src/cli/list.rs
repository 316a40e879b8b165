use super::load_generator;
use std::path::PathBuf;
use uigen::core::UigenResult;
use uigen_core::naming::upper_first;

pub fn run(root: Option<PathBuf>) -> UigenResult<()> {
    let generator = load_generator(root)?;
    let components = generator.list_components()?;

    if components.is_empty() {
        println!("No components found.");
        println!("\nCreate one with: uigen generate <name>");
        return Ok(());
    }

    println!("Components ({}):\n", components.len());
    for name in components {
        println!("  {} ({})", upper_first(&name), name);
    }

    Ok(())
}
