use axum::{
    body::Bytes,
    extract::State,
    response::{Html, Redirect},
};
use std::sync::Arc;
use tracing::warn;

use super::{ApiError, AppState};
use crate::constants::routes;
use crate::models::OrderSubmission;
use crate::views::pages;

const USERNAME_FIELD: &str = "username";
const BRAND_FIELDS: &[&str] = &["laptop_brand[]", "laptop_brand"];

/// Builds the submission from an urlencoded body. Repeated brand keys
/// accumulate in order; unknown keys are ignored.
pub fn parse_submission(body: &[u8]) -> OrderSubmission {
    let mut submission = OrderSubmission::default();

    for (key, value) in url::form_urlencoded::parse(body) {
        if key == USERNAME_FIELD {
            submission.username = value.into_owned();
        } else if BRAND_FIELDS.contains(&key.as_ref()) {
            submission.brands.push(value.into_owned());
        }
    }

    submission
}

pub async fn order_form(State(state): State<Arc<AppState>>) -> Html<String> {
    let brands = state.config().read().await.intake.brands.clone();
    Html(pages::order_form(&brands))
}

pub async fn submit_order(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Redirect, ApiError> {
    let submission = parse_submission(&body);
    state.order_service().submit(submission).await?;
    Ok(Redirect::to(routes::VIEW_ORDERS))
}

pub async fn view_orders(State(state): State<Arc<AppState>>) -> Html<String> {
    let orders = state.order_service().list_orders().await;
    if let Err(e) = &orders {
        warn!(error = %e, "Failed to load repair orders");
    }

    Html(pages::orders(orders.as_deref().map_err(ToString::to_string)))
}
