//! Reading and writing the library file.
//!
//! The file holds one book per line, five fields separated by ` | `:
//!
//! | Field  | Example       | Notes |
//! |--------|---------------|-------|
//! | Title  | Dune          | |
//! | Author | Frank Herbert | |
//! | Year   | 1965          | digits only |
//! | Genre  | Sci-Fi        | |
//! | Read   | True          | exactly `True`, anything else is unread |
//!
//! There is no escaping. Field values containing ` | ` or line breaks are
//! rejected before they reach the store (see [`crate::utils::validation`]).
//!
//! ## Example
//!
//! ```rust
//! use bookshelf::parsing::record::{format_line, parse_line};
//!
//! let book = parse_line("Dune | Frank Herbert | 1965 | Sci-Fi | True", 1).unwrap();
//! assert!(book.read);
//! assert_eq!(format_line(&book), "Dune | Frank Herbert | 1965 | Sci-Fi | True");
//! ```

pub mod record;
