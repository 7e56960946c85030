use clap::Args;

use crate::catalog::store::{CatalogError, CatalogStore};
use crate::cli::{write_books, OutputFormat};
use crate::core::book::Book;

/// Printed in place of a listing or statistics when there are no books
pub const EMPTY_LIBRARY_MESSAGE: &str = "Library is empty.";

/// Printed when the title to mark as read is not in the library
pub const NOT_FOUND_MESSAGE: &str = "Book not found.";

#[derive(Args)]
pub struct MarkReadArgs {
    /// Title of the book to mark as read (case-insensitive)
    #[arg(required = true)]
    pub title: String,
}

pub fn run(store: &CatalogStore, format: OutputFormat) -> anyhow::Result<()> {
    let books: Vec<&Book> = store.books().iter().collect();
    write_books(
        &mut std::io::stdout().lock(),
        &books,
        format,
        EMPTY_LIBRARY_MESSAGE,
    )
}

pub fn run_mark_read(
    args: &MarkReadArgs,
    store: &mut CatalogStore,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let title = args.title.trim();
    let book = match store.mark_read(title) {
        Ok(book) => book,
        Err(CatalogError::NotFound(_)) => anyhow::bail!("{NOT_FOUND_MESSAGE} ('{title}')"),
        Err(e) => return Err(e.into()),
    };

    if let OutputFormat::Text = format {
        println!("Book '{title}' marked as read!");
        return Ok(());
    }
    write_books(&mut std::io::stdout().lock(), &[book], format, "")
}
