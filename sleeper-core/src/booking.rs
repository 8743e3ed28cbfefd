use serde::{Deserialize, Serialize};
use crate::station::Route;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub seat_id: u32,
    pub passenger_name: String,
    pub pickup_station: String,
    pub drop_station: String,
    pub meal_preference: Option<String>,
}

/// Input for a new reservation. Stations are validated by the registry, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub seat_id: u32,
    pub passenger_name: String,
    pub pickup_station: String,
    pub drop_station: String,
    pub meal_preference: Option<String>,
}

impl NewBooking {
    /// Booking on the full corridor (first station to last).
    pub fn on_default_route(
        seat_id: u32,
        passenger_name: impl Into<String>,
        meal_preference: Option<String>,
    ) -> Self {
        let route = Route::default();
        Self {
            seat_id,
            passenger_name: passenger_name.into(),
            pickup_station: route.pickup_station().to_string(),
            drop_station: route.drop_station().to_string(),
            meal_preference,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cancellation {
    pub status: String,
    pub seat_id: u32,
    pub passenger_name: String,
}

impl Cancellation {
    pub fn of(booking: Booking) -> Self {
        Self {
            status: "cancelled".to_string(),
            seat_id: booking.seat_id,
            passenger_name: booking.passenger_name,
        }
    }
}

/// Trims a free-text meal choice; blank input means no preference.
pub fn normalize_meal(meal_preference: Option<&str>) -> Option<String> {
    meal_preference
        .map(str::trim)
        .filter(|meal| !meal.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_meal() {
        assert_eq!(normalize_meal(Some("  Jain ")), Some("Jain".to_string()));
        assert_eq!(normalize_meal(Some("   ")), None);
        assert_eq!(normalize_meal(None), None);
    }

    #[test]
    fn test_cancellation_shape() {
        let booking = NewBooking::on_default_route(2, "Riya Shah", None);
        assert_eq!(booking.pickup_station, "Ahmedabad (Paldi)");
        assert_eq!(booking.drop_station, "Mumbai (Dadar)");

        let cancelled = Cancellation::of(Booking {
            seat_id: 2,
            passenger_name: "Riya Shah".to_string(),
            pickup_station: booking.pickup_station,
            drop_station: booking.drop_station,
            meal_preference: None,
        });
        let json = serde_json::to_value(&cancelled).unwrap();
        assert_eq!(json, serde_json::json!({
            "status": "cancelled",
            "seat_id": 2,
            "passenger_name": "Riya Shah",
        }));
    }
}
