use crate::http::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn list_objects(State(state): State<AppState>) -> Response {
    match state.gateway.list_objects().await {
        Ok(names) => Json(names).into_response(),
        Err(e) => {
            tracing::error!("Listing bucket objects failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
        }
    }
}

pub async fn download_object(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.gateway.download_object(&name).await {
        Ok(Some(data)) => (
            [
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", name),
                ),
                (
                    header::CONTENT_TYPE,
                    "application/octet-stream".to_string(),
                ),
            ],
            data,
        )
            .into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::error!("Downloading object [{}] failed: {}", name, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
        }
    }
}
