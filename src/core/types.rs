use serde::{Deserialize, Serialize};

/// Answer to "Have you read this book?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadStatus {
    Read,
    Unread,
}

impl ReadStatus {
    /// Parse a yes/no answer. Surrounding whitespace and letter case are ignored.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Some(Self::Read),
            "no" => Some(Self::Unread),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_read(self) -> bool {
        matches!(self, Self::Read)
    }
}

impl From<bool> for ReadStatus {
    fn from(read: bool) -> Self {
        if read {
            Self::Read
        } else {
            Self::Unread
        }
    }
}

impl std::fmt::Display for ReadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read => write!(f, "Read"),
            Self::Unread => write!(f, "Unread"),
        }
    }
}

/// Summary counts over the whole catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
}

impl LibraryStats {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Percentage of books read, unrounded. `None` for an empty library.
    #[must_use]
    pub fn percent_read(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let pct = self.read as f64 / self.total as f64 * 100.0;
        Some(pct)
    }
}

impl std::fmt::Display for LibraryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(pct) = self.percent_read() else {
            return write!(f, "Library is empty.");
        };
        write!(
            f,
            "Total Books: {}\nBooks Read: {} ({pct:.2}%)",
            self.total, self.read
        )
    }
}
