use std::sync::Arc;

use axum::{
    Form, Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    filter::{ReviewFilter, ReviewQuery},
    rank::rank,
    state::AppState,
};

/// Form body accepted by the write endpoint. Both fields are optional at the
/// parsing layer so absence can be reported per field.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubmitReview {
    pub location: Option<String>,
    pub review_body: Option<String>,
}

pub async fn reviews_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReviewQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ReviewFilter::from_query(params, state.store.known_locations())?;

    let reviews = filter.apply(state.store.snapshot().await);
    let ranked = rank(&state.scorer, reviews)?;

    Ok(Json(ranked))
}

pub async fn submit_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SubmitReview>,
) -> Result<impl IntoResponse, AppError> {
    let location = form
        .location
        .filter(|location| !location.is_empty())
        .ok_or(AppError::MissingField("Location"))?;
    let review_body = form
        .review_body
        .filter(|body| !body.is_empty())
        .ok_or(AppError::MissingField("ReviewBody"))?;

    let review = state.store.append(&location, &review_body).await?;

    Ok((StatusCode::CREATED, Json(review)))
}
