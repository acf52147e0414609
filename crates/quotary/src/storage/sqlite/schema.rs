//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! pure data with no I/O.

/// SQL statements to create all tables.
///
/// `PRAGMA foreign_keys` is per-connection and must run before any cascade
/// delete; the repository holds a single connection, so setting it here is
/// enough.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Authors table
CREATE TABLE IF NOT EXISTS authors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    surname TEXT NOT NULL UNIQUE
);

-- Quotes table
CREATE TABLE IF NOT EXISTS quotes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    author_id INTEGER NOT NULL,
    quote TEXT NOT NULL,
    FOREIGN KEY (author_id) REFERENCES authors(id) ON DELETE CASCADE
);

-- Index for per-author quote lookups
CREATE INDEX IF NOT EXISTS idx_quotes_author_id ON quotes(author_id);
"#;

// Author queries
pub const INSERT_AUTHOR: &str = r#"
INSERT INTO authors (name, surname)
VALUES (?1, ?2)
"#;

pub const SELECT_AUTHORS: &str = r#"
SELECT id, name, surname
FROM authors
ORDER BY id ASC
"#;

pub const SELECT_AUTHOR_BY_ID: &str = r#"
SELECT id, name, surname
FROM authors
WHERE id = ?1
"#;

pub const SELECT_AUTHOR_BY_NAME: &str = r#"
SELECT id, name, surname
FROM authors
WHERE name = ?1 AND surname = ?2
"#;

pub const UPDATE_AUTHOR: &str = r#"
UPDATE authors
SET name = ?2, surname = ?3
WHERE id = ?1
"#;

pub const DELETE_AUTHOR: &str = r#"
DELETE FROM authors
WHERE id = ?1
"#;

// Quote queries
pub const INSERT_QUOTE: &str = r#"
INSERT INTO quotes (author_id, quote)
VALUES (?1, ?2)
"#;

pub const SELECT_QUOTES: &str = r#"
SELECT id, author_id, quote
FROM quotes
ORDER BY id ASC
"#;

pub const SELECT_QUOTES_BY_AUTHOR: &str = r#"
SELECT id, author_id, quote
FROM quotes
WHERE author_id = ?1
ORDER BY id ASC
"#;

pub const SELECT_QUOTE_BY_AUTHOR_AND_ID: &str = r#"
SELECT id, author_id, quote
FROM quotes
WHERE author_id = ?1 AND id = ?2
"#;

pub const UPDATE_QUOTE: &str = r#"
UPDATE quotes
SET quote = ?2
WHERE id = ?1
"#;

pub const DELETE_QUOTE: &str = r#"
DELETE FROM quotes
WHERE author_id = ?1 AND id = ?2
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_defines_schema() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS authors"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS quotes"));
        assert!(CREATE_TABLES.contains("PRAGMA foreign_keys = ON"));
        assert!(CREATE_TABLES.contains("ON DELETE CASCADE"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        // Author queries
        assert!(INSERT_AUTHOR.contains("INSERT"));
        assert!(SELECT_AUTHORS.contains("SELECT"));
        assert!(SELECT_AUTHOR_BY_ID.contains("WHERE id"));
        assert!(SELECT_AUTHOR_BY_NAME.contains("name = ?1 AND surname = ?2"));
        assert!(UPDATE_AUTHOR.contains("UPDATE"));
        assert!(DELETE_AUTHOR.contains("DELETE"));

        // Quote queries
        assert!(INSERT_QUOTE.contains("INSERT"));
        assert!(SELECT_QUOTES.contains("SELECT"));
        assert!(SELECT_QUOTES_BY_AUTHOR.contains("author_id = ?1"));
        assert!(SELECT_QUOTE_BY_AUTHOR_AND_ID.contains("author_id = ?1 AND id = ?2"));
        assert!(UPDATE_QUOTE.contains("UPDATE"));
        assert!(DELETE_QUOTE.contains("author_id = ?1 AND id = ?2"));
    }
}
