//! Domain service for repair orders.
//!
//! Handlers and CLI commands go through [`OrderService`] instead of touching
//! the store, so intake validation lives in one place.

use crate::models::{NewOrder, Order, OrderSubmission, Table};
use thiserror::Error;

/// Domain errors for order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Submission rejected before anything was written.
    #[error("{0}")]
    Validation(String),

    /// Underlying query failed. The message embeds the cause.
    #[error("{0}")]
    Database(String),
}

impl OrderError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<anyhow::Error> for OrderError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

impl From<sea_orm::DbErr> for OrderError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait OrderService: Send + Sync {
    /// Validates and records a new order, returning its id.
    ///
    /// # Errors
    ///
    /// - Returns [`OrderError::Validation`] if the username or brands are missing
    /// - Returns [`OrderError::Database`] if the insert fails
    async fn submit(&self, submission: OrderSubmission) -> Result<i32, OrderError>;

    /// Lists every order, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Database`] on query failures.
    async fn list_orders(&self) -> Result<Vec<Order>, OrderError>;

    /// Fetches the raw `repairs` table (columns and rows) for the
    /// normalization views.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Database`] on query failures.
    async fn repairs_table(&self) -> Result<Table, OrderError>;
}

/// Presence checks only. Blank brand entries are dropped before counting.
pub fn validate_submission(submission: OrderSubmission) -> Result<NewOrder, OrderError> {
    let username = submission.username.trim();
    if username.is_empty() {
        return Err(OrderError::validation("Username is required"));
    }

    let brands: Vec<String> = submission
        .brands
        .iter()
        .map(|b| b.trim())
        .filter(|b| !b.is_empty())
        .map(str::to_string)
        .collect();

    if brands.is_empty() {
        return Err(OrderError::validation(
            "At least one laptop brand must be selected",
        ));
    }

    Ok(NewOrder {
        username: username.to_string(),
        brands,
    })
}
