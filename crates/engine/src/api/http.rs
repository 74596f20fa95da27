//! HTTP routes.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

use marquee_domain::{Movie, MovieId};

use super::response::{respond_with_error, respond_with_json, respond_with_success};
use crate::app::App;
use crate::infrastructure::ports::RepoError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        .route(
            "/movies",
            get(list_movies)
                .post(create_movie)
                .put(update_movie)
                .delete(delete_movie),
        )
        .route("/movies/{id}", get(find_movie))
}

async fn health() -> &'static str {
    "OK"
}

async fn list_movies(State(app): State<Arc<App>>) -> Result<Response, ApiError> {
    let movies = app.movies.find_all().await?;
    Ok(respond_with_json(StatusCode::OK, &movies))
}

async fn find_movie(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = MovieId::parse(&id).map_err(|_| ApiError::InvalidId)?;
    let movie = app.movies.find_by_id(id).await.map_err(|e| {
        if e.is_not_found() {
            ApiError::InvalidId
        } else {
            ApiError::Store(e)
        }
    })?;
    Ok(respond_with_json(StatusCode::OK, &movie))
}

async fn create_movie(
    State(app): State<Arc<App>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let movie = decode_movie(&body?)?.with_generated_id();
    app.movies.insert(&movie).await?;
    tracing::info!(movie_id = ?movie.id, "Created movie");
    Ok(respond_with_json(StatusCode::CREATED, &movie))
}

async fn update_movie(
    State(app): State<Arc<App>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let movie = decode_addressed_movie(&body?)?;
    app.movies.update(&movie).await?;
    Ok(respond_with_success())
}

async fn delete_movie(
    State(app): State<Arc<App>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let movie = decode_addressed_movie(&body?)?;
    app.movies.delete(&movie).await?;
    Ok(respond_with_success())
}

fn decode_movie(body: &[u8]) -> Result<Movie, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request payload");
        ApiError::InvalidPayload
    })
}

/// Update and delete address an existing record, so the body must carry its id.
fn decode_addressed_movie(body: &[u8]) -> Result<Movie, ApiError> {
    let movie = decode_movie(body)?;
    if !movie.has_id() {
        tracing::debug!("Rejected request payload without id");
        return Err(ApiError::InvalidPayload);
    }
    Ok(movie)
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request payload")]
    InvalidPayload,
    #[error("Invalid Movie ID")]
    InvalidId,
    /// Body could not be read at all (e.g. over the default 2 MiB limit).
    #[error("{message}")]
    Body { status: StatusCode, message: String },
    #[error(transparent)]
    Store(#[from] RepoError),
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Body {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidPayload | ApiError::InvalidId => {
                respond_with_error(StatusCode::BAD_REQUEST, &self.to_string())
            }
            ApiError::Body { status, message } => {
                tracing::debug!(status = %status, error = %message, "Rejected request body");
                respond_with_error(*status, message)
            }
            ApiError::Store(e) => {
                tracing::warn!(error = %e, "Store operation failed");
                respond_with_error(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
            }
        }
    }
}
