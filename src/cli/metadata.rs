//! Metadata CLI command

use crate::models::{Language, PalimpsestConfig};
use crate::services::{generate_html_meta, generate_jsonld};
use crate::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, ValueEnum)]
pub enum MetadataFormat {
    Jsonld,
    Html,
}

#[derive(Args)]
pub struct MetadataArgs {
    /// What to generate
    #[arg(long, value_enum, default_value = "jsonld")]
    format: MetadataFormat,

    /// Title of the work
    #[arg(long)]
    title: Option<String>,

    /// Author name
    #[arg(long)]
    author: Option<String>,

    /// Author URL
    #[arg(long)]
    author_url: Option<String>,

    /// Emotional lineage statement
    #[arg(long)]
    lineage: Option<String>,

    /// Language of the rights statement
    #[arg(long, value_enum)]
    language: Option<Language>,

    /// Config file (default: ./palimpsest.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

pub fn run(args: MetadataArgs) -> Result<()> {
    let config = PalimpsestConfig::load(args.config.as_deref())?;
    let mut work = config.work;

    if args.title.is_some() {
        work.title = args.title;
    }
    if args.author.is_some() {
        work.author_name = args.author;
    }
    if args.author_url.is_some() {
        work.author_url = args.author_url;
    }
    if args.lineage.is_some() {
        work.emotional_lineage = args.lineage;
    }
    if let Some(language) = args.language {
        work.language = language;
    }

    match args.format {
        MetadataFormat::Jsonld => println!("{}", generate_jsonld(&work)?),
        MetadataFormat::Html => println!("{}", generate_html_meta(&work)),
    }

    Ok(())
}
