//! # bookshelf
//!
//! A small library for keeping a personal catalogue of books in a plain text file.
//!
//! Each book has a title, author, publication year, genre and a read flag. The
//! catalogue is loaded once into a [`CatalogStore`], which owns the books in
//! insertion order and rewrites the whole file after every change. Titles are
//! unique when compared without regard to letter case.
//!
//! The library file holds one book per line:
//!
//! ```text
//! Dune | Frank Herbert | 1965 | Sci-Fi | True
//! Emma | Jane Austen | 1815 | Classic | False
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use bookshelf::{Book, CatalogStore};
//!
//! let mut store = CatalogStore::open("library.txt").unwrap();
//! store
//!     .add(Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi", false))
//!     .unwrap();
//!
//! for book in store.search("herbert") {
//!     println!("- {book}");
//! }
//!
//! store.mark_read("dune").unwrap();
//! println!("{}", store.stats());
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: The catalogue store and its persistence
//! - [`core`]: Book record and summary types
//! - [`parsing`]: Reading and writing the library file format
//! - [`utils`]: Validation of user-entered fields
//! - [`cli`]: Command-line interface and interactive menu

pub mod catalog;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::store::{CatalogError, CatalogStore};
pub use core::book::Book;
pub use core::types::*;
