//! Check CLI command

use crate::api::HttpComplianceClient;
use crate::models::{LineageFormat, OutputFormat, PalimpsestConfig};
use crate::services::{render, run_checks, CheckInput};
use crate::Result;
use anyhow::Context;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the Palimpsest License file (English, Markdown)
    #[arg(long)]
    license: PathBuf,

    /// Path to the Dutch license file, for localization checks
    #[arg(long)]
    license_nl: Option<PathBuf>,

    /// Path to the AIBDP manifest (JSON)
    #[arg(long)]
    manifest: PathBuf,

    /// Path to the synthetic lineage tag (XML or JSON)
    #[arg(long)]
    lineage_tag: PathBuf,

    /// Format of the lineage tag [default: XML]
    #[arg(long, value_enum, ignore_case = true)]
    tag_format: Option<LineageFormat>,

    /// Trusted SHA-256 hash of the English license
    #[arg(long)]
    signature: Option<String>,

    /// Output format [default: text]
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Apply the advanced manifest rules of this schema version (e.g. v1.1)
    #[arg(long)]
    schema_version: Option<String>,

    /// Compliance API endpoint (overrides config)
    #[arg(long)]
    endpoint: Option<String>,

    /// Config file (default: ./palimpsest.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Run the compliance pipeline; returns whether every check passed
pub async fn run(args: CheckArgs) -> Result<bool> {
    let mut config = PalimpsestConfig::load(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        config.compliance.endpoint = endpoint;
    }

    let output = args.format.unwrap_or(config.defaults.output);
    let input = CheckInput {
        license: args.license,
        license_nl: args.license_nl,
        manifest: args.manifest,
        lineage_tag: args.lineage_tag,
        tag_format: args.tag_format.unwrap_or(config.defaults.tag_format),
        signature: args.signature,
        schema_version: args.schema_version.or(config.defaults.schema_version.clone()),
        verbose: args.verbose,
    };

    let client = HttpComplianceClient::from_config(&config.compliance)
        .context("Failed to create compliance API client")?;
    if args.verbose {
        eprintln!("{}", format!("→ Compliance endpoint {}", client.endpoint()).cyan());
    }

    let report = run_checks(&input, &client).await?;
    println!("{}", render(&report, output)?);

    let valid = report.is_valid();
    if args.verbose {
        if valid {
            eprintln!("{}", "✅ All checks passed".green());
        } else {
            eprintln!("{}", "❌ One or more checks failed".red());
        }
    }

    Ok(valid)
}
