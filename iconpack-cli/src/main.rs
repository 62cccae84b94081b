//! iconpack CLI - Command-line interface
//!
//! Runs the icon pipeline outside a build tool: regenerate the declaration
//! file, print the virtual module, or check freshness in CI.

mod commands;
mod error;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use error::CliError;

#[derive(Parser)]
#[command(name = "iconpack")]
#[command(version = iconpack::VERSION)]
#[command(about = "Icon aggregation with fingerprinted type declarations", long_about = None)]
struct Cli {
    /// Config file (default: iconpack.ini under the project root)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Project root
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load all icon sources and regenerate the type declaration if needed
    Build,

    /// Print the virtual module body
    Module,

    /// Exit with an error if the type declaration is out of date
    Check,

    /// Print the fingerprint of the current icon set
    Fingerprint,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = iconpack::logging::init_logging(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = commands::load_config(&cli.root, cli.config.as_deref())?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::RuntimeCreation(e.to_string()))?;

    runtime.block_on(async {
        match cli.command {
            Commands::Build => commands::build::run(&config).await,
            Commands::Module => commands::module::run(config).await,
            Commands::Check => commands::check::run(&config).await,
            Commands::Fingerprint => commands::fingerprint::run(&config).await,
        }
    })
}
