use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::book::Book;
use crate::core::types::LibraryStats;
use crate::parsing::record::{self, ParseError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to access library file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse library file: {0}")]
    Parse(#[from] ParseError),

    #[error("Failed to serialize library: {0}")]
    Json(#[from] serde_json::Error),

    #[error("A book with this title already exists: '{0}'")]
    DuplicateTitle(String),

    #[error("Book not found: '{0}'")]
    NotFound(String),
}

/// Export format version for compatibility checking
pub const EXPORT_VERSION: &str = "1.0.0";

/// Serializable export format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportData {
    pub version: String,
    pub exported_at: String,
    pub books: Vec<Book>,
}

/// The in-memory catalogue together with the file it is persisted to.
///
/// Every successful mutation rewrites the whole file.
#[derive(Debug)]
pub struct CatalogStore {
    path: PathBuf,
    books: Vec<Book>,
}

impl CatalogStore {
    /// Load the catalogue stored at `path`.
    ///
    /// A missing file yields an empty catalogue; nothing is written until the
    /// first mutation.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file exists but cannot be read, or
    /// `CatalogError::Parse` if any line is malformed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        let path = path.into();
        let books = match std::fs::read_to_string(&path) {
            Ok(content) => record::parse_text(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No library file at {}, starting empty", path.display());
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        debug!("Loaded {} books from {}", books.len(), path.display());
        Ok(Self { path, books })
    }

    /// Path of the backing library file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Find a book by case-insensitive title
    pub fn get(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.has_title(title))
    }

    /// Overwrite the library file with the current catalogue.
    ///
    /// The new contents go to a temporary file in the same directory which is
    /// then renamed over the target.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be written.
    pub fn save(&self) -> Result<(), CatalogError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }

        let mut temp = tempfile::NamedTempFile::new_in(dir)?;
        temp.write_all(record::format_text(&self.books).as_bytes())?;
        temp.flush()?;
        // The rename must not change the mode of an existing library file
        if let Ok(meta) = std::fs::metadata(&self.path) {
            temp.as_file().set_permissions(meta.permissions())?;
        }
        temp.persist(&self.path).map_err(|e| e.error)?;

        debug!("Saved {} books to {}", self.books.len(), self.path.display());
        Ok(())
    }

    /// Append a book and persist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateTitle` without touching the catalogue
    /// or the file if a book with the same title (ignoring case) exists, or
    /// `CatalogError::Io` if saving fails.
    pub fn add(&mut self, book: Book) -> Result<(), CatalogError> {
        if self.get(&book.title).is_some() {
            return Err(CatalogError::DuplicateTitle(book.title));
        }

        info!("Adding '{}'", book.title);
        self.books.push(book);
        self.save()
    }

    /// Remove every book whose title matches (ignoring case) and persist.
    ///
    /// The file is rewritten even when nothing matched. Returns the number of
    /// books removed.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if saving fails.
    pub fn remove(&mut self, title: &str) -> Result<usize, CatalogError> {
        let before = self.books.len();
        self.books.retain(|b| !b.has_title(title));
        let removed = before - self.books.len();

        if removed == 0 {
            warn!("No book titled '{}' to remove", title);
        } else {
            info!("Removed {} book(s) titled '{}'", removed, title);
        }

        self.save()?;
        Ok(removed)
    }

    /// Books whose title or author contains `query`, ignoring case, in catalogue order
    pub fn search(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.matches_query(&needle))
            .collect()
    }

    /// Mark the book with the given title (ignoring case) as read and persist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` without saving if no title matches, or
    /// `CatalogError::Io` if saving fails.
    pub fn mark_read(&mut self, title: &str) -> Result<&Book, CatalogError> {
        let index = self
            .books
            .iter()
            .position(|b| b.has_title(title))
            .ok_or_else(|| CatalogError::NotFound(title.to_string()))?;

        self.books[index].read = true;
        info!("Marked '{}' as read", self.books[index].title);
        self.save()?;
        Ok(&self.books[index])
    }

    /// Count of all books and of books read
    pub fn stats(&self) -> LibraryStats {
        LibraryStats {
            total: self.books.len(),
            read: self.books.iter().filter(|b| b.read).count(),
        }
    }

    /// Export the catalogue to JSON
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let data = ExportData {
            version: EXPORT_VERSION.to_string(),
            exported_at: chrono::Utc::now().to_rfc3339(),
            books: self.books.clone(),
        };
        Ok(serde_json::to_string_pretty(&data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dune() -> Book {
        Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi", false)
    }

    fn store_in(dir: &TempDir) -> CatalogStore {
        CatalogStore::open(dir.path().join("library.txt")).unwrap()
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_open_malformed_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.txt");
        std::fs::write(&path, "Dune | Frank Herbert | 1965\n").unwrap();

        let err = CatalogStore::open(&path).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Parse(ParseError::FieldCount { line: 1, found: 3 })
        ));
    }

    #[test]
    fn test_add_persists() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add(dune()).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "Dune | Frank Herbert | 1965 | Sci-Fi | False\n");
    }

    #[test]
    fn test_add_duplicate_title_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add(dune()).unwrap();
        let before = std::fs::read_to_string(store.path()).unwrap();

        let err = store
            .add(Book::new("DUNE", "A.", "1999", "X", true))
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateTitle(ref t) if t == "DUNE"));
        assert_eq!(store.books(), &[dune()]);
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_duplicate_add_does_not_create_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.txt");
        let mut store = CatalogStore::open(&path).unwrap();
        store.books.push(dune());

        assert!(store.add(dune()).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_remove_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add(dune()).unwrap();
        store
            .add(Book::new("Emma", "Jane Austen", "1815", "Classic", true))
            .unwrap();

        assert_eq!(store.remove("dUnE").unwrap(), 1);
        assert_eq!(store.len(), 1);
        assert_eq!(store.books()[0].title, "Emma");

        let reloaded = CatalogStore::open(store.path()).unwrap();
        assert_eq!(reloaded.books(), store.books());
    }

    #[test]
    fn test_remove_missing_title_still_saves() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        assert_eq!(store.remove("Nothing").unwrap(), 0);
        assert!(store.is_empty());
        // The empty catalogue was written out
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "");
    }

    #[test]
    fn test_search_title_or_author() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add(dune()).unwrap();
        store
            .add(Book::new("Emma", "Jane Austen", "1815", "Classic", true))
            .unwrap();
        store
            .add(Book::new("Children of Dune", "Frank Herbert", "1976", "Sci-Fi", false))
            .unwrap();

        let titles: Vec<&str> = store.search("DUNE").iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Children of Dune"]);

        let titles: Vec<&str> = store.search("austen").iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Emma"]);

        assert!(store.search("tolkien").is_empty());
        // Genre is not searched
        assert!(store.search("classic").is_empty());
    }

    #[test]
    fn test_mark_read() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add(dune()).unwrap();

        let book = store.mark_read("dune").unwrap();
        assert!(book.read);

        let reloaded = CatalogStore::open(store.path()).unwrap();
        assert!(reloaded.books()[0].read);
    }

    #[test]
    fn test_mark_read_not_found_does_not_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.txt");
        let mut store = CatalogStore::open(&path).unwrap();

        let err = store.mark_read("Dune").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_stats() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        assert_eq!(store.stats(), LibraryStats { total: 0, read: 0 });

        store.add(dune()).unwrap();
        store
            .add(Book::new("Emma", "Jane Austen", "1815", "Classic", true))
            .unwrap();
        let stats = store.stats();
        assert_eq!(stats, LibraryStats { total: 2, read: 1 });
        assert_eq!(stats.percent_read(), Some(50.0));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        let books = vec![
            Book::new("Zorba the Greek", "Nikos Kazantzakis", "1946", "Fiction", true),
            Book::new("anathem", "Neal Stephenson", "2008", "Sci-Fi", false),
            Book::new("Beowulf", "Unknown", "1000", "Epic", true),
        ];
        for book in &books {
            store.add(book.clone()).unwrap();
        }

        let reloaded = CatalogStore::open(store.path()).unwrap();
        assert_eq!(reloaded.books(), books.as_slice());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("library.txt");
        let mut store = CatalogStore::open(&path).unwrap();
        store.add(dune()).unwrap();
        assert!(path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library.txt");
        std::fs::write(&path, "").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let mut store = CatalogStore::open(&path).unwrap();
        store.add(dune()).unwrap();
        store.mark_read("Dune").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_to_json() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.add(dune()).unwrap();

        let json = store.to_json().unwrap();
        let data: ExportData = serde_json::from_str(&json).unwrap();
        assert_eq!(data.version, EXPORT_VERSION);
        assert_eq!(data.books, vec![dune()]);
        assert!(json.contains("\"exported_at\""));
    }
}
