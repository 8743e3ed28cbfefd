pub mod app_config;
pub mod memory_repo;
pub mod registry;

pub use memory_repo::InMemoryBookingRepository;
pub use registry::BookingRegistry;
