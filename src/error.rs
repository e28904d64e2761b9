use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum AppError {
    /// `location` filter naming a location absent from the seed dataset.
    #[error("Invalid Location")]
    UnknownFilterLocation,

    /// Submitted `Location` field absent from the seed dataset. The casing
    /// differs from the filter-side message; both are part of the wire
    /// contract.
    #[error("invalid Location")]
    UnknownReviewLocation,

    /// Required submission field absent or empty.
    #[error("Missing {0}")]
    MissingField(&'static str),

    #[error("Sentiment scoring produced no {0} component")]
    Scoring(&'static str),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::UnknownFilterLocation
            | AppError::UnknownReviewLocation
            | AppError::MissingField(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            AppError::Scoring(_) | AppError::Internal(_) => {
                warn!("Request failed: {self}");

                // Exact wire text, misspelling included.
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error occured".to_string(),
                )
                    .into_response()
            }
        }
    }
}
