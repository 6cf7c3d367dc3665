pub mod appointment;
pub mod store;

pub use appointment::AppointmentService;
pub use store::{AppointmentStore, InMemoryAppointmentStore, SupabaseAppointmentStore};
