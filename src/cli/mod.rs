//! Command-line interface for bookshelf.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **menu**: Interactive numbered menu (the default when no command is given)
//! - **add**: Add a book
//! - **remove**: Remove a book by title
//! - **search**: Find books by title or author
//! - **list**: Show every book
//! - **mark-read**: Mark a book as read
//! - **stats**: Show how much of the library has been read
//! - **export**: Write the library as JSON
//!
//! ## Usage
//!
//! ```text
//! # Interactive menu on ./library.txt
//! bookshelf
//!
//! # One-shot commands against another file
//! bookshelf --library ~/books.txt add --title Dune --author "Frank Herbert" \
//!     --year 1965 --genre Sci-Fi --read yes
//! bookshelf --library ~/books.txt search herbert --format json
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::book::Book;

pub mod add;
pub mod export;
pub mod list;
pub mod menu;
pub mod remove;
pub mod search;
pub mod stats;

/// Library file used when neither `--library` nor `BOOKSHELF_LIBRARY` is set
pub const DEFAULT_LIBRARY_PATH: &str = "library.txt";

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(version)]
#[command(about = "Keep a personal catalogue of books in a plain text file")]
#[command(
    long_about = "bookshelf keeps track of the books you own and whether you have read them.\n\nThe catalogue lives in a plain text file with one book per line:\n    Title | Author | Year | Genre | True/False\n\nRun without a command for the interactive menu."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the library file
    #[arg(
        short,
        long,
        global = true,
        env = "BOOKSHELF_LIBRARY",
        default_value = DEFAULT_LIBRARY_PATH
    )]
    pub library: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for one-shot commands
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive menu
    Menu,

    /// Add a book to the library
    Add(add::AddArgs),

    /// Remove a book by title
    Remove(remove::RemoveArgs),

    /// Search books by title or author
    Search(search::SearchArgs),

    /// List every book in the library
    List,

    /// Mark a book as read
    MarkRead(list::MarkReadArgs),

    /// Show library statistics
    Stats,

    /// Export the library to a JSON file
    Export(export::ExportArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Write a list of books in the requested format.
///
/// Text output uses the same `- Title by Author (Year) - Read` lines as the
/// interactive menu; `empty_message` is printed instead when there are none.
pub(crate) fn write_books<W: Write>(
    out: &mut W,
    books: &[&Book],
    format: OutputFormat,
    empty_message: &str,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if books.is_empty() {
                writeln!(out, "{empty_message}")?;
            }
            for book in books {
                writeln!(out, "- {book}")?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(books)?)?;
        }
        OutputFormat::Tsv => {
            writeln!(out, "title\tauthor\tyear\tgenre\tread")?;
            for book in books {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}",
                    book.title, book.author, book.year, book.genre, book.read
                )?;
            }
        }
    }
    Ok(())
}
