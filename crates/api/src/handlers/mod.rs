//! Request handlers.
//!
//! Handlers delegate to the repository in `quotekeeper_db` and map errors
//! via [`AppError`](crate::error::AppError).

pub mod quotes;
