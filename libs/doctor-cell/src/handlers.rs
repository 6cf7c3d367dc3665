use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use shared_config::AppConfig;
use shared_models::{AppError, CollectionModel, EntityModel, LinkBuilder};

use crate::links::{doctor_collection, doctor_model};
use crate::models::Doctor;
use crate::services::{DoctorService, DoctorStore};

pub struct DoctorState {
    pub service: DoctorService,
    pub links: LinkBuilder,
}

impl DoctorState {
    pub fn new(store: Arc<dyn DoctorStore>, config: &AppConfig) -> Self {
        Self {
            service: DoctorService::new(store),
            links: LinkBuilder::new(config.public_base_url.as_str()),
        }
    }
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<DoctorState>>,
) -> Result<Json<CollectionModel<Doctor>>, AppError> {
    let doctors = state.service.list_doctors().await?;

    Ok(Json(doctor_collection(&state.links, doctors)))
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<DoctorState>>,
    Json(request): Json<Doctor>,
) -> Result<Json<Doctor>, AppError> {
    let doctor = state.service.create_doctor(request).await?;

    Ok(Json(doctor))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<DoctorState>>,
    Path(doctor_id): Path<i32>,
) -> Result<Json<EntityModel<Doctor>>, AppError> {
    let doctor = state.service.get_doctor(doctor_id).await?;

    Ok(Json(doctor_model(&state.links, doctor)))
}

// Returns the bare entity, without links, like create.
#[axum::debug_handler]
pub async fn replace_doctor(
    State(state): State<Arc<DoctorState>>,
    Path(doctor_id): Path<i32>,
    Json(request): Json<Doctor>,
) -> Result<Json<Doctor>, AppError> {
    let doctor = state.service.replace_doctor(doctor_id, request).await?;

    Ok(Json(doctor))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(state): State<Arc<DoctorState>>,
    Path(doctor_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.service.delete_doctor(doctor_id).await?;

    Ok(StatusCode::OK)
}
