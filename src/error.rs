use axum::{http::StatusCode, response::{Html, IntoResponse, Response}};
use thiserror::Error;
use tracing::error;

use crate::graphql::GraphqlError;
use crate::view;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Upstream error: {0}")]
    Upstream(#[from] GraphqlError),

    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Mentor não encontrado".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(e) => {
                error!("upstream error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Não foi possível carregar o perfil do mentor".to_string(),
                )
            }
            AppError::Config(msg) => {
                error!("configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Html(view::render_error(status, &error_message));

        (status, body).into_response()
    }
}
