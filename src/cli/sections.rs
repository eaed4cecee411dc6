//! Sections CLI command

use crate::parser::parse_sections;
use crate::Result;
use anyhow::Context;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct SectionsArgs {
    /// Markdown license file
    path: PathBuf,

    /// Output in JSON format
    #[arg(short, long)]
    json: bool,
}

pub fn run(args: SectionsArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.path)
        .with_context(|| format!("Failed to read {}", args.path.display()))?;
    let sections = parse_sections(&content);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    if sections.is_empty() {
        println!("{}", "No sections found".yellow());
        return Ok(());
    }

    for (heading, body) in &sections {
        println!("{}", heading.cyan().bold());
        for line in body.lines() {
            println!("   {}", line);
        }
        println!();
    }

    Ok(())
}
