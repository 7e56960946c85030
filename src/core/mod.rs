//! Core data types for the book catalogue.
//!
//! - [`Book`]: One catalogue entry
//! - [`ReadStatus`]: The yes/no answer to "have you read it?"
//! - [`LibraryStats`]: Totals and the percentage read

pub mod book;
pub mod types;

pub use book::Book;
pub use types::{LibraryStats, ReadStatus};
