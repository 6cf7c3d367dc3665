pub mod handlers;
pub mod links;
pub mod router;
pub mod models;
pub mod services;

// Re-export the entity, storage port and routes for the api binary
pub use models::*;
pub use services::*;
pub use handlers::DoctorState;
pub use router::doctor_routes;
