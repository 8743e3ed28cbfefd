use axum::{extract::State, routing::get, Json, Router};
use sleeper_core::Seat;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/seats", get(list_seats))
}

/// GET /seats
/// All seats with their deck label and booking flag
async fn list_seats(State(state): State<AppState>) -> Json<Vec<Seat>> {
    Json(state.bookings.list_seats().await)
}
