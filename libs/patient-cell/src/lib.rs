pub mod handlers;
pub mod links;
pub mod models;
pub mod router;
pub mod services;

pub use models::*;
pub use handlers::PatientState;
pub use router::*;
pub use services::{InMemoryPatientStore, PatientService, PatientStore, SupabasePatientStore};
