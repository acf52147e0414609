//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses repository trait objects so handlers never
//! depend on the concrete storage backend.

use std::sync::Arc;

use quotary_core::storage::{AuthorRepository, QuoteRepository, Result};

use crate::storage::SqliteRepository;

/// Shared application state.
///
/// This is cloned for each request handler and contains the repository
/// trait objects used for database access.
#[derive(Clone)]
pub struct AppState {
    /// Author repository.
    pub author_repo: Arc<dyn AuthorRepository>,
    /// Quote repository.
    pub quote_repo: Arc<dyn QuoteRepository>,
}

impl AppState {
    /// Creates a new AppState with the given repositories.
    pub fn new(
        author_repo: Arc<dyn AuthorRepository>,
        quote_repo: Arc<dyn QuoteRepository>,
    ) -> Self {
        Self {
            author_repo,
            quote_repo,
        }
    }

    /// Creates a state backed by a file-based SQLite database.
    ///
    /// The database file is created if it doesn't exist.
    pub async fn with_sqlite(path: &str) -> Result<Self> {
        let repo = Arc::new(SqliteRepository::new(path).await?);
        Ok(Self::new(repo.clone(), repo))
    }

    /// Creates a state backed by an in-memory SQLite database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn in_memory() -> Result<Self> {
        let repo = Arc::new(SqliteRepository::new_in_memory().await?);
        Ok(Self::new(repo.clone(), repo))
    }
}
