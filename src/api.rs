//! HTTP API
//!
//! Every session action answers with the full view of the page the session
//! lands on, so clients always re-render from fresh state.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::{AetherisConfig, PageConfig};
use crate::error::AetherisError;
use crate::models::{Currency, CurrencyRate};
use crate::session::{PreferencesRequest, SearchRequest, SessionState};
use crate::session_store::{Session, SessionStore, Transition};
use crate::view::{self, PageView};

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SessionStore>,
    pub config: Arc<AetherisConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>, config: AetherisConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    fn new_session_state(&self) -> SessionState {
        let defaults = &self.config.defaults;
        SessionState::new(defaults.origin.clone(), defaults.trip_inputs())
    }
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize, Deserialize)]
pub struct AssistantRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct AssistantResponse {
    pub reply: Option<String>,
}

#[derive(Serialize)]
pub struct CreatedSession {
    pub session_id: Uuid,
    pub view: PageView,
}

#[derive(Serialize, Deserialize)]
pub struct DetailsRequest {
    pub place: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/page", get(get_page))
        .route("/currencies", get(get_currencies))
        .route("/assistant", post(ask_assistant))
        .route("/sessions", post(create_session))
        .route("/sessions/{id}", get(get_session).delete(delete_session))
        .route("/sessions/{id}/search", post(search))
        .route("/sessions/{id}/details", post(show_details))
        .route("/sessions/{id}/return", post(return_home))
        .route("/sessions/{id}/preferences", post(set_preferences))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

async fn get_page(State(state): State<AppState>) -> Json<PageConfig> {
    Json(state.config.page.clone())
}

async fn get_currencies() -> Json<Vec<CurrencyRate>> {
    Json(Currency::ALL.into_iter().map(CurrencyRate::from).collect())
}

async fn ask_assistant(Json(request): Json<AssistantRequest>) -> Json<AssistantResponse> {
    Json(AssistantResponse {
        reply: view::assistant_reply(&request.message),
    })
}

#[instrument(skip(state))]
async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<CreatedSession>), AetherisError> {
    let session = Session::new(state.new_session_state());
    let session_id = session.id;
    let view = view::render(&session.state)?;
    state.store.save(session).await?;

    info!("Created session {}", session_id);
    Ok((StatusCode::CREATED, Json(CreatedSession { session_id, view })))
}

#[instrument(skip(state))]
async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PageView>, AetherisError> {
    let session = state.store.require(id).await?;
    Ok(Json(view::render(&session.state)?))
}

#[instrument(skip(state))]
async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AetherisError> {
    if state.store.delete(id).await? {
        info!("Ended session {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AetherisError::SessionNotFound { id })
    }
}

#[instrument(skip(state, request), fields(query = %request.query))]
async fn search(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<PageView>, AetherisError> {
    apply(&state, id, Box::new(move |session: &mut SessionState| session.search(request))).await
}

#[instrument(skip(state, request), fields(place = %request.place))]
async fn show_details(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<DetailsRequest>,
) -> Result<Json<PageView>, AetherisError> {
    let place = request.place;
    apply(
        &state,
        id,
        Box::new(move |session: &mut SessionState| session.show_details(&place)),
    )
    .await
}

#[instrument(skip(state))]
async fn return_home(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PageView>, AetherisError> {
    apply(
        &state,
        id,
        Box::new(|session: &mut SessionState| {
            session.return_home();
            Ok(())
        }),
    )
    .await
}

#[instrument(skip(state, request))]
async fn set_preferences(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<PreferencesRequest>,
) -> Result<Json<PageView>, AetherisError> {
    apply(
        &state,
        id,
        Box::new(move |session: &mut SessionState| session.set_preferences(request)),
    )
    .await
}

/// Run one transition atomically in the store and render the resulting page.
/// A failed transition stores nothing.
async fn apply(
    state: &AppState,
    id: Uuid,
    transition: Transition,
) -> Result<Json<PageView>, AetherisError> {
    let session = state.store.update(id, transition).await?;
    Ok(Json(view::render(&session)?))
}
