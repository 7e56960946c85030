use clap::Args;

use crate::catalog::store::CatalogStore;
use crate::cli::{write_books, OutputFormat};

/// Printed when a search has no results
pub const NO_MATCHES_MESSAGE: &str = "No matching books found.";

#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in titles and authors (case-insensitive)
    #[arg(required = true)]
    pub query: String,
}

pub fn run(args: &SearchArgs, store: &CatalogStore, format: OutputFormat) -> anyhow::Result<()> {
    let results = store.search(&args.query);
    tracing::debug!("'{}' matched {} books", args.query, results.len());

    write_books(
        &mut std::io::stdout().lock(),
        &results,
        format,
        NO_MATCHES_MESSAGE,
    )
}
