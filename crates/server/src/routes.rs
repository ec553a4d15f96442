//! HTTP routes and handlers.
//!
//! One page: `GET /` and `POST /` both run the recommendation flow (a GET
//! serves an unfiltered page for a random user, matching the form's initial
//! state). `GET /health` is a liveness probe.

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Json, Router};
use catalog::UserId;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::render;
use crate::service::{RecommendOutcome, WARNING_PREFIX};
use crate::state::AppState;

/// Creates the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(recommend))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The recommendation form. Both fields are optional: a missing `genres`
/// field is an empty filter, and `user_id` overrides the random pick.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendForm {
    #[serde(default)]
    pub genres: String,
    pub user_id: Option<UserId>,
}

async fn index(State(state): State<AppState>) -> Html<String> {
    respond(state, RecommendForm::default()).await
}

async fn recommend(State(state): State<AppState>, Form(form): Form<RecommendForm>) -> Html<String> {
    respond(state, form).await
}

/// Run the scoring flow on the blocking pool (it walks the whole filtered
/// catalog) and render the page. A join failure collapses into the same
/// failure banner as any other request-time error.
async fn respond(state: AppState, form: RecommendForm) -> Html<String> {
    let service = state.service.clone();
    let genres_input = form.genres.clone();
    let user_override = form.user_id;

    let outcome = match tokio::task::spawn_blocking(move || {
        service.recommend(&genres_input, user_override)
    })
    .await
    {
        Ok(outcome) => outcome,
        Err(e) => RecommendOutcome::Failed(format!("{WARNING_PREFIX} Something went wrong: {e}")),
    };

    Html(render::render_page(&form.genres, &outcome))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "reel-serve",
    }))
}
