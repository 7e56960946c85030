//! Interactive numbered menu.
//!
//! Reads choices and field values line by line from any [`BufRead`] and
//! writes prompts and results to any [`Write`], so the whole loop can be
//! driven from a test. End of input behaves like choosing Exit.

use std::io::{BufRead, Write};

use crate::catalog::store::{CatalogError, CatalogStore};
use crate::cli::list::{EMPTY_LIBRARY_MESSAGE, NOT_FOUND_MESSAGE};
use crate::cli::remove::removal_message;
use crate::cli::search::NO_MATCHES_MESSAGE;
use crate::core::book::Book;
use crate::core::types::ReadStatus;
use crate::utils::validation::{
    validate_read_status, validate_text_field, validate_year, ValidationError,
};

const MENU: &str = "\nPersonal Library Manager
1. Add a Book
2. Remove a Book
3. Search Books
4. Display All Books
5. Library Statistics
6. Exit";

/// Whether the loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Run the menu on the process's stdin and stdout
pub fn run(store: &mut CatalogStore) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Menu::new(store, stdin.lock(), stdout.lock()).run()
}

pub struct Menu<'a, R, W> {
    store: &'a mut CatalogStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a mut CatalogStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Loop until the user picks Exit or input runs out
    pub fn run(mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Select an option (1-6): ")? else {
                break;
            };

            let flow = match choice.trim() {
                "1" => self.add_book()?,
                "2" => self.remove_book()?,
                "3" => self.search_books()?,
                "4" => self.display_books()?,
                "5" => self.display_statistics()?,
                "6" => Flow::Exit,
                _ => {
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "Exiting... Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `text` and read one line, without its line terminator.
    /// `None` at end of input.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript readable when input ends mid-prompt
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Ask for every field in turn; any invalid answer restarts from the title.
    fn read_new_book(&mut self) -> anyhow::Result<Option<Book>> {
        loop {
            let Some(title) = self.prompt("Enter title: ")? else {
                return Ok(None);
            };
            let title = match validate_text_field("Title", &title) {
                Ok(v) => v,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };

            let Some(author) = self.prompt("Enter author: ")? else {
                return Ok(None);
            };
            let author = match validate_text_field("Author", &author) {
                Ok(v) => v,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };

            let Some(year) = self.prompt("Enter publication year: ")? else {
                return Ok(None);
            };
            let year = match validate_year(&year) {
                Ok(v) => v,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };

            let Some(genre) = self.prompt("Enter genre: ")? else {
                return Ok(None);
            };
            let genre = match validate_text_field("Genre", &genre) {
                Ok(v) => v,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };

            let Some(read) = self.prompt("Have you read this book? (yes/no): ")? else {
                return Ok(None);
            };
            let read = match validate_read_status(&read) {
                Ok(v) => v,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };

            return Ok(Some(Book::new(title, author, year, genre, read)));
        }
    }

    fn report(&mut self, error: &ValidationError) -> anyhow::Result<()> {
        writeln!(self.output, "{error}")?;
        Ok(())
    }

    fn add_book(&mut self) -> anyhow::Result<Flow> {
        let Some(book) = self.read_new_book()? else {
            return Ok(Flow::Exit);
        };

        let title = book.title.clone();
        match self.store.add(book) {
            Ok(()) => writeln!(self.output, "Book '{title}' added successfully!")?,
            Err(CatalogError::DuplicateTitle(_)) => {
                writeln!(self.output, "A book with this title already exists!")?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    fn remove_book(&mut self) -> anyhow::Result<Flow> {
        let Some(title) = self.prompt("Enter the title of the book to remove: ")? else {
            return Ok(Flow::Exit);
        };
        let title = title.trim();
        let removed = self.store.remove(title)?;
        writeln!(self.output, "{}", removal_message(title, removed))?;
        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> anyhow::Result<Flow> {
        let Some(query) = self.prompt("Enter title or author to search: ")? else {
            return Ok(Flow::Exit);
        };

        let results = self.store.search(&query);
        if results.is_empty() {
            writeln!(self.output, "{NO_MATCHES_MESSAGE}")?;
        }
        for book in results {
            writeln!(self.output, "- {book}")?;
        }
        Ok(Flow::Continue)
    }

    fn display_books(&mut self) -> anyhow::Result<Flow> {
        if self.store.is_empty() {
            writeln!(self.output, "{EMPTY_LIBRARY_MESSAGE}")?;
            return Ok(Flow::Continue);
        }
        for book in self.store.books() {
            writeln!(self.output, "- {book}")?;
        }

        let Some(answer) = self.prompt("Would you like to mark any book as read? (yes/no): ")?
        else {
            return Ok(Flow::Exit);
        };
        if ReadStatus::parse(&answer) != Some(ReadStatus::Read) {
            return Ok(Flow::Continue);
        }

        let Some(title) = self.prompt("Enter the title of the book to mark as read: ")? else {
            return Ok(Flow::Exit);
        };
        let title = title.trim();
        match self.store.mark_read(title) {
            Ok(_) => writeln!(self.output, "Book '{title}' marked as read!")?,
            Err(CatalogError::NotFound(_)) => writeln!(self.output, "{NOT_FOUND_MESSAGE}")?,
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    fn display_statistics(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.output, "{}", self.store.stats())?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Feed `script` to the menu and return everything it printed
    fn run_script(store: &mut CatalogStore, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(store, script.as_bytes(), &mut output).run().unwrap();
        String::from_utf8(output).unwrap()
    }

    fn empty_store(dir: &TempDir) -> CatalogStore {
        CatalogStore::open(dir.path().join("library.txt")).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let dir = TempDir::new().unwrap();
        let mut store = empty_store(&dir);
        let out = run_script(&mut store, "6\n");
        assert!(out.contains("Personal Library Manager"));
        assert!(out.ends_with("Exiting... Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let dir = TempDir::new().unwrap();
        let mut store = empty_store(&dir);
        let out = run_script(&mut store, "");
        assert!(out.ends_with("Exiting... Goodbye!\n"));
    }

    #[test]
    fn test_invalid_option() {
        let dir = TempDir::new().unwrap();
        let mut store = empty_store(&dir);
        let out = run_script(&mut store, "9\n6\n");
        assert!(out.contains("Invalid option. Please try again."));
        assert_eq!(out.matches("1. Add a Book").count(), 2);
    }

    #[test]
    fn test_add_book_with_reprompts() {
        let dir = TempDir::new().unwrap();
        let mut store = empty_store(&dir);
        let script = "1\n\
                      \n\
                      Dune\nFrank Herbert\nnineteen\n\
                      Dune\nFrank Herbert\n1965\nSci-Fi\nmaybe\n\
                      Dune\nFrank Herbert\n1965\nSci-Fi\nno\n\
                      6\n";
        let out = run_script(&mut store, script);

        assert!(out.contains("Title cannot be empty. Please enter a valid title."));
        assert!(out.contains("Please enter a valid numerical year."));
        assert!(out.contains("Please enter 'yes' or 'no' for read status."));
        assert!(out.contains("Book 'Dune' added successfully!"));
        assert_eq!(
            store.books(),
            &[Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi", false)]
        );
    }

    #[test]
    fn test_add_then_duplicate_then_mark_read_then_stats() {
        let dir = TempDir::new().unwrap();
        let mut store = empty_store(&dir);
        let script = "1\nDune\nHerbert\n1965\nSci-Fi\nno\n\
                      1\ndune\nA.\n1999\nX\nyes\n\
                      4\nyes\nDUNE\n\
                      5\n\
                      6\n";
        let out = run_script(&mut store, script);

        assert!(out.contains("A book with this title already exists!"));
        assert!(out.contains("- Dune by Herbert (1965) - Unread"));
        assert!(out.contains("Book 'DUNE' marked as read!"));
        assert!(out.contains("Total Books: 1\nBooks Read: 1 (100.00%)"));
        assert_eq!(store.len(), 1);
        assert!(store.books()[0].read);
    }

    #[test]
    fn test_display_empty_and_stats_empty() {
        let dir = TempDir::new().unwrap();
        let mut store = empty_store(&dir);
        let out = run_script(&mut store, "4\n5\n6\n");
        assert_eq!(out.matches("Library is empty.").count(), 2);
        assert!(!out.contains("mark any book"));
    }

    #[test]
    fn test_mark_read_not_found() {
        let dir = TempDir::new().unwrap();
        let mut store = empty_store(&dir);
        store
            .add(Book::new("Emma", "Jane Austen", "1815", "Classic", false))
            .unwrap();

        let out = run_script(&mut store, "4\nyes\nPersuasion\n6\n");
        assert!(out.contains("Book not found."));
        assert!(!store.books()[0].read);
    }

    #[test]
    fn test_search_and_remove() {
        let dir = TempDir::new().unwrap();
        let mut store = empty_store(&dir);
        store
            .add(Book::new("Emma", "Jane Austen", "1815", "Classic", false))
            .unwrap();
        store
            .add(Book::new("Dune", "Frank Herbert", "1965", "Sci-Fi", true))
            .unwrap();

        let out = run_script(&mut store, "3\nAUSTEN\n3\nzzz\n2\nemma\n2\nemma\n6\n");
        assert!(out.contains("- Emma by Jane Austen (1815) - Unread"));
        assert!(out.contains("No matching books found."));
        assert!(out.contains("Book 'emma' removed!"));
        assert!(out.contains("No book titled 'emma' found."));
        assert_eq!(store.len(), 1);
        assert_eq!(store.books()[0].title, "Dune");
    }
}
