//! SQLite row conversion functions.
//!
//! Pure functions for converting SQLite rows to domain types.

use rusqlite::Row;

use quotary_core::quotes::{Author, Quote};

/// Convert a SQLite row to an Author.
///
/// Expected columns: id, name, surname
pub fn row_to_author(row: &Row) -> rusqlite::Result<Author> {
    Ok(Author {
        id: row.get(0)?,
        name: row.get(1)?,
        surname: row.get(2)?,
    })
}

/// Convert a SQLite row to a Quote.
///
/// Expected columns: id, author_id, quote
pub fn row_to_quote(row: &Row) -> rusqlite::Result<Quote> {
    Ok(Quote {
        id: row.get(0)?,
        author_id: row.get(1)?,
        quote: row.get(2)?,
    })
}
