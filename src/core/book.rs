use serde::{Deserialize, Serialize};

use crate::core::types::ReadStatus;

/// A single entry in the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title, unique within the catalogue when compared case-insensitively
    pub title: String,

    pub author: String,

    /// Publication year, kept as the digits the user typed
    pub year: String,

    pub genre: String,

    /// Whether the book has been read
    pub read: bool,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            read,
        }
    }

    /// Case-insensitive title comparison, the catalogue's key equality
    pub fn has_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// True if `needle` (already lowercased) occurs in the title or author
    pub fn matches_query(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }

    pub fn status(&self) -> ReadStatus {
        ReadStatus::from(self.read)
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} by {} ({}) - {}",
            self.title,
            self.author,
            self.year,
            self.status()
        )
    }
}
