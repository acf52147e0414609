//! SQLite repository implementation.
//!
//! Implements the repository traits from `quotary_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use quotary_core::quotes::{Author, NewAuthor, NewQuote, Quote};
use quotary_core::storage::{AuthorRepository, QuoteRepository, RepositoryError, Result};

use super::conversions::{row_to_author, row_to_quote};
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
///
/// Provides async access to SQLite storage for authors and quotes.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

// ============================================================================
// AuthorRepository implementation
// ============================================================================

#[async_trait]
impl AuthorRepository for SqliteRepository {
    async fn list_authors(&self) -> Result<Vec<Author>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_AUTHORS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_author).map_err(wrap_err)?;

                let mut authors = Vec::new();
                for row_result in rows {
                    authors.push(row_result.map_err(wrap_err)?);
                }
                Ok(authors)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Author"))
    }

    async fn get_author(&self, id: i64) -> Result<Option<Author>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_AUTHOR_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_author) {
                    Ok(author) => Ok(Some(author)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Author", id.to_string()))
    }

    async fn find_author_by_name(&self, name: &str, surname: &str) -> Result<Option<Author>> {
        let name = name.to_string();
        let surname = surname.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_AUTHOR_BY_NAME)
                    .map_err(wrap_err)?;
                match stmt.query_row([&name, &surname], row_to_author) {
                    Ok(author) => Ok(Some(author)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Author"))
    }

    async fn create_author(&self, author: &NewAuthor) -> Result<Author> {
        let name = author.name.clone();
        let surname = author.surname.clone();
        let display = author.display_name();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_AUTHOR, rusqlite::params![name, surname])
                    .map_err(wrap_err)?;
                let id = conn.last_insert_rowid();
                Ok(Author { id, name, surname })
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Author", display))
    }

    async fn update_author(&self, author: &Author) -> Result<()> {
        let id = author.id;
        let name = author.name.clone();
        let surname = author.surname.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_AUTHOR, rusqlite::params![id, name, surname])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Author", id.to_string()))
    }

    async fn delete_author(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_AUTHOR, [id])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Author", id.to_string()))
    }
}

// ============================================================================
// QuoteRepository implementation
// ============================================================================

#[async_trait]
impl QuoteRepository for SqliteRepository {
    async fn list_quotes(&self) -> Result<Vec<Quote>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_QUOTES).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_quote).map_err(wrap_err)?;

                let mut quotes = Vec::new();
                for row_result in rows {
                    quotes.push(row_result.map_err(wrap_err)?);
                }
                Ok(quotes)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Quote"))
    }

    async fn list_quotes_by_author(&self, author_id: i64) -> Result<Vec<Quote>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_QUOTES_BY_AUTHOR)
                    .map_err(wrap_err)?;
                let rows = stmt.query_map([author_id], row_to_quote).map_err(wrap_err)?;

                let mut quotes = Vec::new();
                for row_result in rows {
                    quotes.push(row_result.map_err(wrap_err)?);
                }
                Ok(quotes)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Quote"))
    }

    async fn get_quote(&self, author_id: i64, quote_id: i64) -> Result<Option<Quote>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_QUOTE_BY_AUTHOR_AND_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([author_id, quote_id], row_to_quote) {
                    Ok(quote) => Ok(Some(quote)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Quote", quote_id.to_string()))
    }

    async fn create_quote(&self, quote: &NewQuote) -> Result<Quote> {
        let author_id = quote.author_id;
        let text = quote.quote.clone();

        self.conn
            .call(move |conn| {
                conn.execute(schema::INSERT_QUOTE, rusqlite::params![author_id, text])
                    .map_err(wrap_err)?;
                let id = conn.last_insert_rowid();
                Ok(Quote {
                    id,
                    author_id,
                    quote: text,
                })
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Quote"))
    }

    async fn update_quote(&self, quote: &Quote) -> Result<()> {
        let id = quote.id;
        let text = quote.quote.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::UPDATE_QUOTE, rusqlite::params![id, text])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Quote", id.to_string()))
    }

    async fn delete_quote(&self, author_id: i64, quote_id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_QUOTE, [author_id, quote_id])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, "Quote", quote_id.to_string()))
    }
}
