pub mod handlers;
pub mod links;
pub mod models;
pub mod router;
pub mod services;

pub use handlers::AppointmentState;
pub use models::*;
pub use router::appointment_routes;
pub use services::{AppointmentService, AppointmentStore, InMemoryAppointmentStore, SupabaseAppointmentStore};
