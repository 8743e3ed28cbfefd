use std::sync::Arc;
use sleeper_core::BookingRepository;
use sleeper_store::{BookingRegistry, InMemoryBookingRepository};

#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<dyn BookingRepository>,
}

impl AppState {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    /// State over a fresh in-memory registry, optionally seeded with sample bookings.
    pub fn in_memory(seed_sample_bookings: bool) -> Self {
        let registry = if seed_sample_bookings {
            BookingRegistry::with_sample_bookings()
        } else {
            BookingRegistry::new()
        };
        Self::new(Arc::new(InMemoryBookingRepository::new(registry)))
    }
}
