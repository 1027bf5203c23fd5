//! Handlers for the quote store.
//!
//! Create, list, random-sample, fetch, and delete. Listing filters by
//! author in SQL; the tag filter runs in memory over the returned page, so
//! it composes with limit/offset in result order rather than
//! filtered-count order.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rand::seq::IndexedRandom;

use quotekeeper_core::error::CoreError;
use quotekeeper_core::types::DbId;
use quotekeeper_db::models::quote::{CreateQuote, ListQuotesParams};
use quotekeeper_db::repositories::QuoteRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /quotes
///
/// Create a quote. `text` is required and must be non-empty; `author` and
/// `tags` are optional.
pub async fn create_quote(
    State(state): State<AppState>,
    Json(input): Json<CreateQuote>,
) -> AppResult<impl IntoResponse> {
    if input.text.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "text must not be empty".into(),
        )));
    }

    let quote = QuoteRepo::insert(&state.pool, &input).await?;

    tracing::info!(quote_id = quote.id, "Quote created");

    Ok((StatusCode::CREATED, Json(quote)))
}

/// GET /quotes
///
/// List quotes, optionally filtered by exact author and tag containment.
/// Storage applies `limit`/`offset` before the tag filter, so a page may
/// hold fewer than `limit` matching quotes even when more exist beyond the
/// offset window.
pub async fn list_quotes(
    State(state): State<AppState>,
    Query(params): Query<ListQuotesParams>,
) -> AppResult<impl IntoResponse> {
    let mut quotes = QuoteRepo::list(&state.pool, &params).await?;

    if let Some(tag) = &params.tag {
        quotes.retain(|q| {
            q.tags
                .as_ref()
                .is_some_and(|tags| tags.iter().any(|t| t == tag))
        });
    }

    Ok(Json(quotes))
}

/// GET /quotes/random
///
/// Pick one quote uniformly over the whole store. Loads every row, which
/// is fine at this scale; revisit if the table grows large.
pub async fn random_quote(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let quotes = QuoteRepo::list_all(&state.pool).await?;

    let quote = quotes
        .choose(&mut rand::rng())
        .ok_or(AppError::Core(CoreError::Empty { entity: "quotes" }))?;

    Ok(Json(quote.clone()))
}

/// GET /quotes/{id}
///
/// Fetch a single quote by id.
pub async fn get_quote(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let quote = QuoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Quote", id }))?;

    Ok(Json(quote))
}

/// DELETE /quotes/{id}
///
/// Delete a quote by id.
pub async fn delete_quote(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = QuoteRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Quote", id }));
    }

    tracing::info!(quote_id = id, "Quote deleted");

    Ok(StatusCode::NO_CONTENT)
}
