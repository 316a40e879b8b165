use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "uigen")]
#[command(about = "Scaffold UI components from the component template")]
#[command(version)]
struct Cli {
    /// Project root (defaults to the nearest directory with uigen.yaml or package.json)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Log every file written
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new component folder from the template
    Generate {
        /// Component name, e.g. select
        name: String,
        /// Show what would be created without writing anything
        #[arg(long)]
        dry_run: bool,
        /// Write directly into the destination instead of staging first
        #[arg(long)]
        in_place: bool,
    },
    /// List existing components
    List,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate {
            name,
            dry_run,
            in_place,
        } => cli::generate::run(cli.root, name, dry_run, in_place),
        Commands::List => cli::list::run(cli.root),
    };

    // Display error with helpful suggestions
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", uigen::format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
