use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use appointment_cell::{appointment_routes, AppointmentState};
use doctor_cell::{doctor_routes, DoctorState};
use patient_cell::{patient_routes, PatientState};
use shared_config::AppConfig;

use crate::storage::Stores;

pub fn create_router(config: &AppConfig, stores: Stores) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic API is running!" }))
        .nest("/patients", patient_routes(Arc::new(PatientState::new(stores.patients, config))))
        .nest("/doctors", doctor_routes(Arc::new(DoctorState::new(stores.doctors, config))))
        .nest(
            "/appointments",
            appointment_routes(Arc::new(AppointmentState::new(stores.appointments, config))),
        )
}
