//! Quote CRUD handlers.
//!
//! All single-quote routes are scoped to their author: a quote id that exists
//! under a different author is treated as not found.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use quotary_core::quotes::Quote;
use quotary_core::storage::RepositoryError;

use crate::{
    handlers::{error_response, repo_error_response, AppError},
    models::{CreateQuote, UpdateQuote},
    state::AppState,
};

/// List all quotes (GET /quotes).
pub async fn list_quotes(State(state): State<AppState>) -> Result<Json<Vec<Quote>>, AppError> {
    let quotes = state.quote_repo.list_quotes().await?;

    Ok(Json(quotes))
}

/// List an author's quotes (GET /authors/{author_id}/quotes).
///
/// An unknown author is a 404; an author without quotes is an empty list.
pub async fn list_author_quotes(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
) -> Result<Json<Vec<Quote>>, AppError> {
    let author = state.author_repo.get_author(author_id).await?;

    if author.is_none() {
        return Err(RepositoryError::NotFound {
            entity_type: "Author",
            id: author_id.to_string(),
        }
        .into());
    }

    let quotes = state.quote_repo.list_quotes_by_author(author_id).await?;

    Ok(Json(quotes))
}

/// Get a single quote by author and quote ID (GET /authors/{author_id}/quotes/{quote_id}).
pub async fn get_quote(
    State(state): State<AppState>,
    Path((author_id, quote_id)): Path<(i64, i64)>,
) -> Result<Json<Quote>, AppError> {
    let quote = state.quote_repo.get_quote(author_id, quote_id).await?;

    match quote {
        Some(q) => Ok(Json(q)),
        None => Err(RepositoryError::NotFound {
            entity_type: "Quote",
            id: quote_id.to_string(),
        }
        .into()),
    }
}

/// Create a new quote for an author (POST /authors/{author_id}/quotes).
///
/// The author must exist; a dangling author_id is never inserted.
pub async fn create_quote(
    State(state): State<AppState>,
    Path(author_id): Path<i64>,
    form_result: Result<Form<CreateQuote>, FormRejection>,
) -> Result<Json<Quote>, (StatusCode, String)> {
    let Form(payload) = form_result.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse form: {e}"),
        )
    })?;

    tracing::debug!(author_id = %author_id, payload = ?payload, "Received create quote request");

    let author = state
        .author_repo
        .get_author(author_id)
        .await
        .map_err(repo_error_response)?;

    if author.is_none() {
        return Err(error_response(
            StatusCode::NOT_FOUND,
            format!("Author not found: {author_id}"),
        ));
    }

    let created = state
        .quote_repo
        .create_quote(&payload.into_new_quote(author_id))
        .await
        .map_err(repo_error_response)?;

    tracing::info!(quote_id = %created.id, author_id = %author_id, "Created new quote");

    Ok(Json(created))
}

/// Update a quote by ID (PUT /authors/{author_id}/quotes/{quote_id}).
///
/// Partial update: a blank or omitted text field keeps the stored value.
pub async fn update_quote(
    State(state): State<AppState>,
    Path((author_id, quote_id)): Path<(i64, i64)>,
    form_result: Result<Form<UpdateQuote>, FormRejection>,
) -> Result<Json<Quote>, (StatusCode, String)> {
    let Form(payload) = form_result.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse form: {e}"),
        )
    })?;

    tracing::debug!(quote_id = %quote_id, payload = ?payload, "Received update quote request");

    let mut quote = state
        .quote_repo
        .get_quote(author_id, quote_id)
        .await
        .map_err(repo_error_response)?
        .ok_or_else(|| {
            error_response(
                StatusCode::NOT_FOUND,
                format!("Quote not found: {quote_id}"),
            )
        })?;

    payload.apply_to(&mut quote);

    state
        .quote_repo
        .update_quote(&quote)
        .await
        .map_err(repo_error_response)?;

    tracing::info!(quote_id = %quote_id, "Updated quote");

    Ok(Json(quote))
}

/// Delete a quote by ID (DELETE /authors/{author_id}/quotes/{quote_id}).
pub async fn delete_quote(
    State(state): State<AppState>,
    Path((author_id, quote_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, AppError> {
    state.quote_repo.delete_quote(author_id, quote_id).await?;

    tracing::info!(quote_id = %quote_id, author_id = %author_id, "Deleted quote");

    Ok((StatusCode::OK, format!("Quote with id={quote_id} deleted")))
}
