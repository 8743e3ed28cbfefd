use axum::{extract::State, routing::get, Json, Router};
use sleeper_core::Station;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/stations", get(list_stations))
}

/// GET /stations
async fn list_stations(State(state): State<AppState>) -> Json<Vec<Station>> {
    Json(state.bookings.list_stations().await)
}
