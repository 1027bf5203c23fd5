//! Repository for the `quotes` table.
//!
//! Tag filtering is deliberately not pushed into SQL: the HTTP layer
//! filters the returned page in memory, so limit/offset compose in result
//! order rather than filtered-count order.

use quotekeeper_core::types::DbId;
use sqlx::FromRow;

use crate::models::quote::{CreateQuote, ListQuotesParams, Quote};
use crate::DbPool;

/// Column list for `quotes` queries.
const QUOTE_COLUMNS: &str = "id, text, author, tags";

/// Default page size for quote listing.
const DEFAULT_LIMIT: i64 = 100;

/// Internal row mapping; `tags` stays JSON text until decoded.
#[derive(Debug, FromRow)]
struct QuoteRow {
    id: DbId,
    text: String,
    author: Option<String>,
    tags: Option<String>,
}

impl QuoteRow {
    fn into_quote(self) -> Result<Quote, sqlx::Error> {
        let tags = match self.tags {
            Some(json) => {
                Some(serde_json::from_str(&json).map_err(|e| sqlx::Error::Decode(Box::new(e)))?)
            }
            None => None,
        };
        Ok(Quote {
            id: self.id,
            text: self.text,
            author: self.author,
            tags,
        })
    }
}

/// Provides CRUD operations for quotes.
pub struct QuoteRepo;

impl QuoteRepo {
    /// Insert a new quote, returning the full row with its assigned id.
    pub async fn insert(pool: &DbPool, input: &CreateQuote) -> Result<Quote, sqlx::Error> {
        let tags_json = match &input.tags {
            Some(tags) => {
                Some(serde_json::to_string(tags).map_err(|e| sqlx::Error::Encode(Box::new(e)))?)
            }
            None => None,
        };

        let query = format!(
            "INSERT INTO quotes (text, author, tags) \
             VALUES ($1, $2, $3) \
             RETURNING {QUOTE_COLUMNS}"
        );
        sqlx::query_as::<_, QuoteRow>(&query)
            .bind(&input.text)
            .bind(&input.author)
            .bind(tags_json)
            .fetch_one(pool)
            .await?
            .into_quote()
    }

    /// Find a quote by its id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Quote>, sqlx::Error> {
        let query = format!("SELECT {QUOTE_COLUMNS} FROM quotes WHERE id = $1");
        sqlx::query_as::<_, QuoteRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(QuoteRow::into_quote)
            .transpose()
    }

    /// List quotes with an optional exact-match author filter and
    /// pagination. Ordered by id, which for this table is insertion order.
    pub async fn list(pool: &DbPool, params: &ListQuotesParams) -> Result<Vec<Quote>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
        let offset = params.offset.unwrap_or(0);

        let rows = match &params.author {
            Some(author) => {
                let query = format!(
                    "SELECT {QUOTE_COLUMNS} FROM quotes \
                     WHERE author = $1 \
                     ORDER BY id \
                     LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, QuoteRow>(&query)
                    .bind(author)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {QUOTE_COLUMNS} FROM quotes \
                     ORDER BY id \
                     LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, QuoteRow>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await?
            }
        };

        rows.into_iter().map(QuoteRow::into_quote).collect()
    }

    /// Load every quote. Used by random selection, which must pick
    /// uniformly over the whole store rather than a page.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Quote>, sqlx::Error> {
        let query = format!("SELECT {QUOTE_COLUMNS} FROM quotes ORDER BY id");
        sqlx::query_as::<_, QuoteRow>(&query)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(QuoteRow::into_quote)
            .collect()
    }

    /// Delete a quote by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM quotes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
