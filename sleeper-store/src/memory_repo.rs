use async_trait::async_trait;
use sleeper_core::{Booking, BookingRepository, Cancellation, CoreResult, NewBooking, Seat, Station};
use tokio::sync::Mutex;
use crate::registry::BookingRegistry;

/// `BookingRepository` backed by a process-local registry.
///
/// Every operation holds the lock for its whole duration, so the seat
/// conflict check and the insert that follows it cannot interleave.
pub struct InMemoryBookingRepository {
    registry: Mutex<BookingRegistry>,
}

impl InMemoryBookingRepository {
    pub fn new(registry: BookingRegistry) -> Self {
        Self {
            registry: Mutex::new(registry),
        }
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn list_seats(&self) -> Vec<Seat> {
        self.registry.lock().await.list_seats()
    }

    async fn list_stations(&self) -> Vec<Station> {
        self.registry.lock().await.list_stations()
    }

    async fn book_seat(&self, booking: NewBooking) -> CoreResult<Booking> {
        self.registry.lock().await.book_seat(booking)
    }

    async fn add_meal(&self, seat_id: u32, meal_preference: &str) -> CoreResult<Booking> {
        self.registry.lock().await.add_meal(seat_id, meal_preference)
    }

    async fn cancel_booking(&self, seat_id: u32) -> CoreResult<Cancellation> {
        self.registry.lock().await.cancel_booking(seat_id)
    }
}
