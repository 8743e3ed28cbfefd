use async_trait::async_trait;
use crate::booking::{Booking, Cancellation, NewBooking};
use crate::seat::Seat;
use crate::station::Station;
use crate::CoreResult;

/// Storage-agnostic access to the coach's reservations.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn list_seats(&self) -> Vec<Seat>;

    async fn list_stations(&self) -> Vec<Station>;

    async fn book_seat(&self, booking: NewBooking) -> CoreResult<Booking>;

    async fn add_meal(&self, seat_id: u32, meal_preference: &str) -> CoreResult<Booking>;

    async fn cancel_booking(&self, seat_id: u32) -> CoreResult<Cancellation>;
}
