//! Event list and per-event action endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::Local;
use serde::{Deserialize, Serialize};

use eventboard_core::BoardError;
use eventboard_core::event::EventRecord;
use eventboard_core::filter::{CategoryFilter, filter_events};
use eventboard_core::ics;
use eventboard_core::source::LoadStatus;
use eventboard_core::view::{self, EventCard, SharePayload};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/{id}", get(show_event))
        .route("/events/{id}/calendar.ics", get(event_calendar))
        .route("/events/{id}/share", get(event_share))
        .route("/events/{id}/directions", get(event_directions))
        .route("/refresh", post(refresh))
}

#[derive(Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub q: Option<String>,
}

/// Presentation state for the list container on the page.
#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListState {
    Loading,
    Ready,
    Empty,
    Error,
}

#[derive(Serialize)]
pub struct EventListResponse {
    pub state: ListState,
    pub events: Vec<EventCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /events - the filtered card list
async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<EventListResponse> {
    let snapshot = state.events.snapshot().await;

    if let LoadStatus::Failed { message } = snapshot.status {
        return Json(EventListResponse {
            state: ListState::Error,
            events: Vec::new(),
            error: Some(message),
        });
    }

    let category = CategoryFilter::from_param(params.category.as_deref());
    let query = params.q.unwrap_or_default();
    let now = Local::now().naive_local();

    let events: Vec<EventCard> = filter_events(&snapshot.records, &category, &query)
        .into_iter()
        .map(|record| EventCard::from_record(record, now))
        .collect();

    let list_state = if events.is_empty() {
        match snapshot.status {
            LoadStatus::Loading => ListState::Loading,
            _ => ListState::Empty,
        }
    } else {
        ListState::Ready
    };

    Json(EventListResponse {
        state: list_state,
        events,
        error: None,
    })
}

/// GET /events/:id - one card
async fn show_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventCard>, AppError> {
    let record = find_event(&state, &id).await?;
    let card = EventCard::from_record(&record, Local::now().naive_local());
    Ok(Json(card))
}

/// GET /events/:id/calendar.ics - downloadable calendar file
async fn event_calendar(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let record = find_event(&state, &id).await?;
    let content = ics::generate_ics(&record)?;
    let filename = ics::ics_filename(&record);

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/calendar; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        content,
    )
        .into_response())
}

/// GET /events/:id/share - payload for the page's native-share fallback
async fn event_share(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SharePayload>, AppError> {
    let record = find_event(&state, &id).await?;
    Ok(Json(SharePayload::for_event(&record, &state.page_url)))
}

/// GET /events/:id/directions - redirect to a maps route
async fn event_directions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let record = find_event(&state, &id).await?;
    match view::directions_url(&record) {
        Some(url) => Ok(Redirect::temporary(&url).into_response()),
        None => Ok((StatusCode::NOT_FOUND, "virtual event has no directions").into_response()),
    }
}

/// POST /refresh - force a load cycle now (the page's retry button)
async fn refresh(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.events.load_cycle().await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn find_event(state: &AppState, id: &str) -> Result<EventRecord, BoardError> {
    let snapshot = state.events.snapshot().await;
    snapshot
        .records
        .iter()
        .find(|record| record.id == id)
        .cloned()
        .ok_or_else(|| BoardError::EventNotFound(id.to_string()))
}
