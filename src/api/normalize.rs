use axum::{extract::State, response::Html};
use std::sync::Arc;
use tracing::{debug, warn};

use super::AppState;
use crate::normalize::Normalization;
use crate::views::pages;

/// Fetches `repairs` once and renders every normal-form view from it.
pub async fn normalize_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let normalization = state
        .order_service()
        .repairs_table()
        .await
        .map(Normalization::from_table);

    match &normalization {
        Ok(n) => debug!(
            source_rows = n.original.len(),
            first_nf_rows = n.first.repairs.len(),
            users = n.third.users.len(),
            "Computed normalization views"
        ),
        Err(e) => warn!(error = %e, "Failed to load repairs table"),
    }

    Html(pages::normalization(
        normalization.as_ref().map_err(ToString::to_string),
    ))
}
