use clap::Args;

use crate::catalog::store::CatalogStore;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct RemoveArgs {
    /// Title of the book to remove (case-insensitive)
    #[arg(required = true)]
    pub title: String,
}

pub fn run(args: &RemoveArgs, store: &mut CatalogStore, format: OutputFormat) -> anyhow::Result<()> {
    let title = args.title.trim();
    let removed = store.remove(title)?;

    match format {
        OutputFormat::Text => println!("{}", removal_message(title, removed)),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "title": title,
                "removed": removed,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("title\tremoved");
            println!("{title}\t{removed}");
        }
    }

    Ok(())
}

/// User-facing result line for a removal
pub(crate) fn removal_message(title: &str, removed: usize) -> String {
    if removed == 0 {
        format!("No book titled '{title}' found.")
    } else {
        format!("Book '{title}' removed!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_message() {
        assert_eq!(removal_message("Dune", 1), "Book 'Dune' removed!");
        assert_eq!(removal_message("Dune", 0), "No book titled 'Dune' found.");
    }
}
