use sleeper_core::booking::normalize_meal;
use sleeper_core::seat::{Seat, TOTAL_SEATS};
use sleeper_core::station::{all_stations, Route, Station};
use sleeper_core::{Booking, Cancellation, CoreError, CoreResult, NewBooking};
use tracing::{debug, info};

/// Reservations seeded on startup so the prototype looks lived-in.
const SAMPLE_BOOKINGS: [(u32, &str, &str); 5] = [
    (2, "Riya Shah", "Vegetarian"),
    (7, "Aarav Mehta", "Jain"),
    (16, "Neha Patel", "Vegetarian"),
    (23, "Kabir Desai", "Non-Vegetarian"),
    (29, "Ishita Joshi", "Vegetarian"),
];

/// In-memory registry of active bookings for a single coach.
///
/// Holds at most one booking per seat. Lookups scan the active list, which
/// never exceeds the seat count.
#[derive(Debug, Default)]
pub struct BookingRegistry {
    bookings: Vec<Booking>,
}

impl BookingRegistry {
    pub fn new() -> Self {
        Self { bookings: Vec::new() }
    }

    /// Registry pre-loaded with the fixed sample bookings on the default route.
    pub fn with_sample_bookings() -> Self {
        let mut registry = Self::new();
        registry.seed_sample_bookings();
        registry
    }

    /// Seeds the sample bookings. No-op if anything is already booked.
    pub fn seed_sample_bookings(&mut self) {
        if !self.bookings.is_empty() {
            return;
        }

        let route = Route::default();
        for (seat_id, passenger_name, meal) in SAMPLE_BOOKINGS {
            self.bookings.push(Booking {
                seat_id,
                passenger_name: passenger_name.to_string(),
                pickup_station: route.pickup_station().to_string(),
                drop_station: route.drop_station().to_string(),
                meal_preference: Some(meal.to_string()),
            });
        }
        debug!("Seeded {} sample bookings", self.bookings.len());
    }

    pub fn list_seats(&self) -> Vec<Seat> {
        (1..=TOTAL_SEATS)
            .map(|seat_id| Seat::new(seat_id, self.is_seat_booked(seat_id)))
            .collect()
    }

    pub fn list_stations(&self) -> Vec<Station> {
        all_stations()
    }

    #[cfg(test)]
    fn active_bookings(&self) -> &[Booking] {
        &self.bookings
    }

    #[cfg(test)]
    fn get_booking(&self, seat_id: u32) -> Option<&Booking> {
        self.bookings.iter().find(|booking| booking.seat_id == seat_id)
    }

    pub fn is_seat_booked(&self, seat_id: u32) -> bool {
        self.find_index(seat_id).is_some()
    }

    pub fn book_seat(&mut self, request: NewBooking) -> CoreResult<Booking> {
        if self.is_seat_booked(request.seat_id) {
            return Err(CoreError::SeatConflict(request.seat_id));
        }

        let route = Route::resolve(&request.pickup_station, &request.drop_station)?;

        let booking = Booking {
            seat_id: request.seat_id,
            passenger_name: request.passenger_name.trim().to_string(),
            pickup_station: route.pickup_station().to_string(),
            drop_station: route.drop_station().to_string(),
            meal_preference: normalize_meal(request.meal_preference.as_deref()),
        };
        self.bookings.push(booking.clone());

        info!(
            seat_id = booking.seat_id,
            pickup = %booking.pickup_station,
            drop = %booking.drop_station,
            "Seat booked"
        );
        Ok(booking)
    }

    pub fn add_meal(&mut self, seat_id: u32, meal_preference: &str) -> CoreResult<Booking> {
        let index = self.find_index(seat_id).ok_or(CoreError::NotFound(seat_id))?;

        let booking = &mut self.bookings[index];
        booking.meal_preference = normalize_meal(Some(meal_preference));

        info!(seat_id, meal = ?booking.meal_preference, "Meal preference updated");
        Ok(booking.clone())
    }

    pub fn cancel_booking(&mut self, seat_id: u32) -> CoreResult<Cancellation> {
        let index = self.find_index(seat_id).ok_or(CoreError::NotFound(seat_id))?;

        let cancelled = self.bookings.remove(index);
        info!(seat_id, "Booking cancelled");
        Ok(Cancellation::of(cancelled))
    }

    fn find_index(&self, seat_id: u32) -> Option<usize> {
        self.bookings.iter().position(|booking| booking.seat_id == seat_id)
    }
}
