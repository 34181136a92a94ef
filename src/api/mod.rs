use axum::extract::{FromRequestParts, Path, Query};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::response::Html;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;

use crate::error::AppError;
use crate::services::ProfilePageService;
use crate::state::AppState;
use crate::view::{self, RenderOptions};

#[derive(Deserialize)]
struct ProfileQueryParams {
    #[serde(default)]
    schedule: Option<String>,
}

impl ProfileQueryParams {
    fn modal_open(&self) -> bool {
        self.schedule.as_deref() == Some("open")
    }
}

/// Bearer token of the viewer, if the request carries one.
pub struct BearerToken(pub Option<String>);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(AUTHORIZATION) else {
            return Ok(BearerToken(None));
        };

        let value = value
            .to_str()
            .map_err(|_| AppError::BadRequest("Authorization header is not valid text".to_string()))?;

        // The auth scheme is case-insensitive.
        let token = value
            .trim()
            .split_once(' ')
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, token)| token.trim())
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        Ok(BearerToken(token))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/mentors/{id}", get(mentor_profile))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn mentor_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<ProfileQueryParams>,
    BearerToken(token): BearerToken,
) -> Result<Html<String>, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::BadRequest("Mentor id is empty".to_string()));
    }

    let service = ProfilePageService::new(state.client.clone(), state.config.page_timeout);
    let page = service.load(id, token.as_deref()).await?;

    let options = RenderOptions {
        modal_open: params.modal_open(),
        refresh_secs: state.config.refresh_secs,
    };
    Ok(Html(view::render_page(&page, options)))
}
