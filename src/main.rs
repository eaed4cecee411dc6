use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use palimpsest::Result;
use std::io;

#[derive(Parser)]
#[command(name = "palimpsest")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Palimpsest License parser, validator and compliance reporter", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a license, manifest and lineage tag and print a compliance report
    Check(palimpsest::cli::check::CheckArgs),

    /// Print the SHA-256 of a file, for use as a trusted signature
    Hash(palimpsest::cli::hash::HashArgs),

    /// Show the sections extracted from a Markdown license
    Sections(palimpsest::cli::sections::SectionsArgs),

    /// Generate JSON-LD or HTML meta tags for a licensed work
    Metadata(palimpsest::cli::metadata::MetadataArgs),

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("{}", format!("Fatal error: {}", e).red());
            std::process::exit(1);
        }
    };

    match runtime.block_on(run_async(cli)) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", format!("Fatal error: {:#}", e).red());
            std::process::exit(1);
        }
    }
}

/// Dispatch a command; `Ok(false)` means it ran but reported failures
async fn run_async(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Check(args) => {
            return palimpsest::cli::check::run(args).await;
        }

        Commands::Hash(args) => {
            palimpsest::cli::hash::run(args)?;
        }

        Commands::Sections(args) => {
            palimpsest::cli::sections::run(args)?;
        }

        Commands::Metadata(args) => {
            palimpsest::cli::metadata::run(args)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "palimpsest", &mut io::stdout());
        }
    }

    Ok(true)
}
