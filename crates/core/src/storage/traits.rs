use async_trait::async_trait;

use crate::quotes::{Author, NewAuthor, NewQuote, Quote};

use super::Result;

/// Repository for author operations.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Gets all authors.
    async fn list_authors(&self) -> Result<Vec<Author>>;

    /// Gets an author by its ID.
    async fn get_author(&self, id: i64) -> Result<Option<Author>>;

    /// Gets an author by its exact name and surname.
    async fn find_author_by_name(&self, name: &str, surname: &str) -> Result<Option<Author>>;

    /// Inserts a new author and returns it with its assigned ID.
    async fn create_author(&self, author: &NewAuthor) -> Result<Author>;

    /// Updates an existing author.
    async fn update_author(&self, author: &Author) -> Result<()>;

    /// Deletes an author by its ID, cascading to its quotes.
    async fn delete_author(&self, id: i64) -> Result<()>;
}

/// Repository for quote operations.
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Gets all quotes.
    async fn list_quotes(&self) -> Result<Vec<Quote>>;

    /// Gets all quotes belonging to an author.
    async fn list_quotes_by_author(&self, author_id: i64) -> Result<Vec<Quote>>;

    /// Gets a single quote scoped to its author.
    async fn get_quote(&self, author_id: i64, quote_id: i64) -> Result<Option<Quote>>;

    /// Inserts a new quote and returns it with its assigned ID.
    async fn create_quote(&self, quote: &NewQuote) -> Result<Quote>;

    /// Updates an existing quote.
    async fn update_quote(&self, quote: &Quote) -> Result<()>;

    /// Deletes a quote scoped to its author.
    async fn delete_quote(&self, author_id: i64, quote_id: i64) -> Result<()>;
}
