//! The songs endpoint: date in, resolved top-10 tracks out.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use chartday_core::TrackRecord;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SongsParams {
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /api/songs?date=YYYY-MM-DD
///
/// Returns the resolved top-10 tracks for the date's chart, in rank order.
/// The date is not validated beyond presence; a bad date surfaces as an
/// upstream failure. All downstream failures collapse to a fixed 500 body,
/// with the cause logged server-side only.
pub async fn get_songs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SongsParams>,
) -> Result<Json<Vec<TrackRecord>>, (StatusCode, Json<ErrorResponse>)> {
    let date = match params.date.as_deref() {
        Some(date) if !date.is_empty() => date,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Date parameter is required".to_string(),
                }),
            ));
        }
    };

    match state.lookup().top_tracks(date).await {
        Ok(tracks) => Ok(Json(tracks)),
        Err(e) => {
            error!("Failed to resolve chart for '{}': {}", date, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error".to_string(),
                }),
            ))
        }
    }
}
