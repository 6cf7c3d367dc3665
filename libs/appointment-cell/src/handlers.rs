use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use shared_config::AppConfig;
use shared_models::{AppError, CollectionModel, EntityModel, LinkBuilder};

use crate::links::{appointment_collection, appointment_model};
use crate::models::Appointment;
use crate::services::{AppointmentService, AppointmentStore};

pub struct AppointmentState {
    pub service: AppointmentService,
    pub links: LinkBuilder,
}

impl AppointmentState {
    pub fn new(store: Arc<dyn AppointmentStore>, config: &AppConfig) -> Self {
        Self {
            service: AppointmentService::new(store),
            links: LinkBuilder::new(config.public_base_url.as_str()),
        }
    }
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppointmentState>>,
) -> Result<Json<CollectionModel<Appointment>>, AppError> {
    let appointments = state.service.list_appointments().await?;

    Ok(Json(appointment_collection(&state.links, appointments)))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<AppointmentState>>,
    Json(request): Json<Appointment>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = state.service.create_appointment(request).await?;

    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<AppointmentState>>,
    Path(appointment_id): Path<i32>,
) -> Result<Json<EntityModel<Appointment>>, AppError> {
    let appointment = state.service.get_appointment(appointment_id).await?;

    Ok(Json(appointment_model(&state.links, appointment)))
}

#[axum::debug_handler]
pub async fn replace_appointment(
    State(state): State<Arc<AppointmentState>>,
    Path(appointment_id): Path<i32>,
    Json(request): Json<Appointment>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = state
        .service
        .replace_appointment(appointment_id, request)
        .await?;

    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<AppointmentState>>,
    Path(appointment_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.service.delete_appointment(appointment_id).await?;

    Ok(StatusCode::OK)
}
