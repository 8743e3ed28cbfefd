use axum::{
    extract::State,
    routing::{delete, post},
    Json, Router,
};
use serde::Deserialize;
use sleeper_core::{Booking, Cancellation, NewBooking, Route};
use tracing::info;
use crate::error::AppError;
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;
use crate::validation::{validate_seat_id, validate_text, MEAL_PREFERENCE_LEN, PASSENGER_NAME_LEN};

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct BookRequest {
    pub seat_id: u32,
    pub passenger_name: String,
    pub pickup_station: Option<String>,
    pub drop_station: Option<String>,
    pub meal_preference: Option<String>,
}

impl BookRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate_seat_id(self.seat_id)?;
        validate_text(&self.passenger_name, "passenger_name", PASSENGER_NAME_LEN)?;
        // A blank meal is accepted here and stored as no preference
        if let Some(meal) = self.meal_preference.as_deref().filter(|m| !m.trim().is_empty()) {
            validate_text(meal, "meal_preference", MEAL_PREFERENCE_LEN)?;
        }
        Ok(())
    }

    fn into_new_booking(self) -> NewBooking {
        let route = Route::default();
        NewBooking {
            seat_id: self.seat_id,
            passenger_name: self.passenger_name,
            pickup_station: self.pickup_station.unwrap_or_else(|| route.pickup_station().to_string()),
            drop_station: self.drop_station.unwrap_or_else(|| route.drop_station().to_string()),
            meal_preference: self.meal_preference,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MealRequest {
    pub seat_id: u32,
    pub meal_preference: String,
}

impl MealRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate_seat_id(self.seat_id)?;
        validate_text(&self.meal_preference, "meal_preference", MEAL_PREFERENCE_LEN)
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/book", post(book_seat))
        .route("/meal", post(add_meal))
        .route("/cancel/{seat_id}", delete(cancel_booking))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /book
/// Reserve a seat. Stations default to the full corridor when omitted.
async fn book_seat(
    State(state): State<AppState>,
    AppJson(req): AppJson<BookRequest>,
) -> Result<Json<Booking>, AppError> {
    req.validate()?;

    let booking = state.bookings.book_seat(req.into_new_booking()).await?;
    info!(seat_id = booking.seat_id, "Booking created");

    Ok(Json(booking))
}

/// POST /meal
/// Replace the meal preference on an existing booking
async fn add_meal(
    State(state): State<AppState>,
    AppJson(req): AppJson<MealRequest>,
) -> Result<Json<Booking>, AppError> {
    req.validate()?;

    let booking = state.bookings.add_meal(req.seat_id, &req.meal_preference).await?;
    Ok(Json(booking))
}

/// DELETE /cancel/{seat_id}
async fn cancel_booking(
    State(state): State<AppState>,
    AppPath(seat_id): AppPath<u32>,
) -> Result<Json<Cancellation>, AppError> {
    validate_seat_id(seat_id)?;

    let cancellation = state.bookings.cancel_booking(seat_id).await?;
    info!(seat_id, passenger = %cancellation.passenger_name, "Booking released");

    Ok(Json(cancellation))
}
