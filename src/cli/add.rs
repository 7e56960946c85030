use clap::Args;

use crate::catalog::store::CatalogStore;
use crate::cli::{write_books, OutputFormat};
use crate::core::book::Book;
use crate::utils::validation::{
    validate_read_status, validate_text_field, validate_year, ValidationError,
};

#[derive(Args)]
pub struct AddArgs {
    /// Book title (must be unique, ignoring case)
    #[arg(long, required = true)]
    pub title: String,

    /// Author name
    #[arg(long, required = true)]
    pub author: String,

    /// Publication year (digits only)
    #[arg(long, required = true)]
    pub year: String,

    /// Genre
    #[arg(long, required = true)]
    pub genre: String,

    /// Have you read this book? (yes/no)
    #[arg(long, default_value = "no")]
    pub read: String,
}

impl AddArgs {
    /// Validate every field and build the book to add
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` encountered.
    pub fn to_book(&self) -> Result<Book, ValidationError> {
        Ok(Book::new(
            validate_text_field("Title", &self.title)?,
            validate_text_field("Author", &self.author)?,
            validate_year(&self.year)?,
            validate_text_field("Genre", &self.genre)?,
            validate_read_status(&self.read)?,
        ))
    }
}

pub fn run(args: &AddArgs, store: &mut CatalogStore, format: OutputFormat) -> anyhow::Result<()> {
    let book = args.to_book()?;
    store.add(book.clone())?;

    if let OutputFormat::Text = format {
        println!("Book '{}' added successfully!", book.title);
        return Ok(());
    }
    write_books(&mut std::io::stdout().lock(), &[&book], format, "")
}
