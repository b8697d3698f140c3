//! Announcement panel endpoint.

use axum::{Json, Router, extract::State, routing::get};

use eventboard_core::announcements::Announcement;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/announcements", get(list_announcements))
}

/// GET /announcements - current announcement list
async fn list_announcements(State(state): State<AppState>) -> Json<Vec<Announcement>> {
    Json(state.announcements.load().await)
}
