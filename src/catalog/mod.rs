//! Book catalogue storage.
//!
//! The catalogue is an ordered list of [`Book`](crate::core::book::Book)s
//! backed by a plain text file. [`CatalogStore`](store::CatalogStore) loads
//! the file once and rewrites it in full after every successful add, remove
//! or mark-read. Read-only operations never touch the file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bookshelf::CatalogStore;
//!
//! let mut store = CatalogStore::open("library.txt").unwrap();
//!
//! // Removing a title that is not present is not an error
//! let removed = store.remove("No Such Book").unwrap();
//! assert_eq!(removed, 0);
//!
//! // Export to JSON
//! let json = store.to_json().unwrap();
//! ```

pub mod store;
