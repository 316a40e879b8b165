use super::load_generator;
use std::path::PathBuf;
use uigen::core::UigenResult;
use uigen::generator::GenerateOptions;
use uigen::template::EntryKind;

pub fn run(root: Option<PathBuf>, name: String, dry_run: bool, in_place: bool) -> UigenResult<()> {
    let generator = load_generator(root)?;

    let options = GenerateOptions {
        dry_run,
        staged: if in_place { Some(false) } else { None },
    };
    let report = generator.generate(&name, options)?;

    if dry_run {
        println!(
            "Would create component {} at {}:\n",
            report.pascal_name,
            report.relative_destination.display()
        );
        for entry in &report.planned {
            let shown = pathdiff::diff_paths(&entry.target, generator.project_root())
                .unwrap_or_else(|| entry.target.clone());
            match entry.kind {
                EntryKind::Directory => println!("  {}/", shown.display()),
                EntryKind::File => println!("  {}", shown.display()),
            }
        }
        println!(
            "\n{} file(s), {} directory(ies). Nothing was written.",
            report.stats.files, report.stats.directories
        );
        return Ok(());
    }

    println!(
        "✓ Created component {} at {}",
        report.pascal_name,
        report.relative_destination.display()
    );
    println!(
        "  {} file(s), {} directory(ies)",
        report.stats.files, report.stats.directories
    );

    Ok(())
}
