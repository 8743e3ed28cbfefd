use sleeper_core::seat::{is_valid_seat_id, TOTAL_SEATS};
use crate::error::AppError;

pub const PASSENGER_NAME_LEN: (usize, usize) = (2, 80);
pub const MEAL_PREFERENCE_LEN: (usize, usize) = (2, 60);

pub fn validate_seat_id(seat_id: u32) -> Result<(), AppError> {
    if !is_valid_seat_id(seat_id) {
        return Err(AppError::ValidationError(format!(
            "seat_id must be between 1 and {}, got {}",
            TOTAL_SEATS, seat_id
        )));
    }
    Ok(())
}

/// Checks the trimmed length of a text field in characters.
pub fn validate_text(value: &str, field: &str, (min, max): (usize, usize)) -> Result<(), AppError> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(AppError::ValidationError(format!(
            "{} must be between {} and {} characters",
            field, min, max
        )));
    }
    Ok(())
}
