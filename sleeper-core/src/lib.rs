pub mod booking;
pub mod repository;
pub mod seat;
pub mod station;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Seat {0} is already booked")]
    SeatConflict(u32),
    #[error("Invalid route: {0}")]
    InvalidRoute(String),
    #[error("No active booking for seat {0}")]
    NotFound(u32),
}

pub type CoreResult<T> = Result<T, CoreError>;

pub use booking::{Booking, Cancellation, NewBooking};
pub use repository::BookingRepository;
pub use seat::{Deck, Seat, TOTAL_SEATS};
pub use station::{Route, Station, STATIONS};
