use thiserror::Error;

use crate::core::book::Book;

/// Separator between fields on a stored line
pub const FIELD_SEPARATOR: &str = " | ";

/// Number of fields on every stored line
pub const FIELD_COUNT: usize = 5;

const TRUE_LITERAL: &str = "True";
const FALSE_LITERAL: &str = "False";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Line {line}: expected {FIELD_COUNT} fields separated by '{FIELD_SEPARATOR}', found {found}")]
    FieldCount { line: usize, found: usize },
}

/// Parse one stored line into a [`Book`].
///
/// The read flag is true only for the exact text `True`; anything else reads
/// as unread. Trailing line terminators and surrounding whitespace are ignored.
///
/// # Errors
///
/// Returns `ParseError::FieldCount` if the line does not hold exactly five fields.
pub fn parse_line(line: &str, line_num: usize) -> Result<Book, ParseError> {
    let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();

    let [title, author, year, genre, read] = fields.as_slice() else {
        return Err(ParseError::FieldCount {
            line: line_num,
            found: fields.len(),
        });
    };

    Ok(Book::new(*title, *author, *year, *genre, *read == TRUE_LITERAL))
}

/// Render a [`Book`] as one stored line, without the trailing newline.
pub fn format_line(book: &Book) -> String {
    let read = if book.read {
        TRUE_LITERAL
    } else {
        FALSE_LITERAL
    };
    [
        book.title.as_str(),
        book.author.as_str(),
        book.year.as_str(),
        book.genre.as_str(),
        read,
    ]
    .join(FIELD_SEPARATOR)
}

/// Parse the full contents of a library file.
///
/// Blank lines are skipped. Line numbers in errors are 1-based.
///
/// # Errors
///
/// Returns the first `ParseError` encountered; no partial result is produced.
pub fn parse_text(text: &str) -> Result<Vec<Book>, ParseError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line, i + 1))
        .collect()
}

/// Render books as the full contents of a library file, one line each.
pub fn format_text<'a>(books: impl IntoIterator<Item = &'a Book>) -> String {
    let mut out = String::new();
    for book in books {
        out.push_str(&format_line(book));
        out.push('\n');
    }
    out
}
