//! Author CRUD handlers.
//!
//! These handlers use repository trait objects for database access.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use quotary_core::quotes::Author;
use quotary_core::storage::RepositoryError;

use crate::{
    handlers::{error_response, repo_error_response, AppError},
    models::{CreateAuthor, UpdateAuthor},
    state::AppState,
};

/// List all authors (GET /authors).
pub async fn list_authors(State(state): State<AppState>) -> Result<Json<Vec<Author>>, AppError> {
    let authors = state.author_repo.list_authors().await?;

    Ok(Json(authors))
}

/// Get a single author by ID (GET /authors/{id}).
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Author>, AppError> {
    let author = state.author_repo.get_author(id).await?;

    match author {
        Some(a) => Ok(Json(a)),
        None => Err(RepositoryError::NotFound {
            entity_type: "Author",
            id: id.to_string(),
        }
        .into()),
    }
}

/// Create a new author (POST /authors).
///
/// Requires `name` and `surname`. Both fields are column-level UNIQUE, so a
/// submission colliding with any stored author on either field is a conflict.
pub async fn create_author(
    State(state): State<AppState>,
    form_result: Result<Form<CreateAuthor>, FormRejection>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let Form(payload) = form_result.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse form: {e}"),
        )
    })?;

    tracing::debug!(payload = ?payload, "Received create author request");

    let author = payload.into_new_author();

    // Pre-check the exact pair so the conflict message can name the duplicate.
    // The UNIQUE constraints still backstop single-field collisions.
    let existing = state
        .author_repo
        .find_author_by_name(&author.name, &author.surname)
        .await
        .map_err(repo_error_response)?;

    if let Some(existing) = existing {
        return Err(error_response(
            StatusCode::CONFLICT,
            format!("Author already exists: {}", existing.display_name()),
        ));
    }

    let created = state
        .author_repo
        .create_author(&author)
        .await
        .map_err(repo_error_response)?;

    tracing::info!(author_id = %created.id, name = %created.display_name(), "Created new author");

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an author by ID (PUT /authors/{id}).
///
/// Partial update: blank or omitted fields keep the stored value. An update
/// that changes nothing is rejected.
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    form_result: Result<Form<UpdateAuthor>, FormRejection>,
) -> Result<Json<Author>, (StatusCode, String)> {
    let Form(payload) = form_result.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse form: {e}"),
        )
    })?;

    tracing::debug!(author_id = %id, payload = ?payload, "Received update author request");

    let existing = state
        .author_repo
        .get_author(id)
        .await
        .map_err(repo_error_response)?
        .ok_or_else(|| error_response(StatusCode::NOT_FOUND, format!("Author not found: {id}")))?;

    let mut author = existing.clone();
    payload.apply_to(&mut author);

    if author == existing {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            format!(
                "Author {id} already has name={}, surname={}",
                author.name, author.surname
            ),
        ));
    }

    state
        .author_repo
        .update_author(&author)
        .await
        .map_err(repo_error_response)?;

    tracing::info!(author_id = %id, "Updated author");

    Ok(Json(author))
}

/// Delete an author by ID (DELETE /authors/{id}).
///
/// Also deletes all quotes belonging to this author (cascade).
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.author_repo.delete_author(id).await?;

    tracing::info!(author_id = %id, "Deleted author and its quotes");

    Ok((StatusCode::OK, format!("Author with id={id} deleted")))
}
