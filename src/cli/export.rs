use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::catalog::store::CatalogStore;

#[derive(Args)]
pub struct ExportArgs {
    /// Output file path
    #[arg(required = true)]
    pub output: PathBuf,
}

pub fn run(args: &ExportArgs, store: &CatalogStore) -> anyhow::Result<()> {
    let json = store.to_json()?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Exported {} books to {}",
        store.len(),
        args.output.display()
    );
    Ok(())
}
