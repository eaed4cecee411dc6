//! Hash CLI command

use crate::validator::hash_file;
use crate::Result;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct HashArgs {
    /// File to hash (the value printed is what `check --signature` expects)
    path: PathBuf,
}

pub fn run(args: HashArgs) -> Result<()> {
    let digest = hash_file(&args.path)
        .with_context(|| format!("Failed to read {}", args.path.display()))?;
    println!("{}", digest);
    Ok(())
}
