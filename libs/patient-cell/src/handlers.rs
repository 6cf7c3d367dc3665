use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use shared_config::AppConfig;
use shared_models::{AppError, CollectionModel, EntityModel, LinkBuilder};

use crate::links::{patient_collection, patient_model};
use crate::models::Patient;
use crate::services::{PatientService, PatientStore};

pub struct PatientState {
    pub service: PatientService,
    pub links: LinkBuilder,
}

impl PatientState {
    pub fn new(store: Arc<dyn PatientStore>, config: &AppConfig) -> Self {
        Self {
            service: PatientService::new(store),
            links: LinkBuilder::new(config.public_base_url.as_str()),
        }
    }
}

#[axum::debug_handler]
pub async fn list_patients(
    State(state): State<Arc<PatientState>>,
) -> Result<Json<CollectionModel<Patient>>, AppError> {
    let patients = state.service.list_patients().await?;

    Ok(Json(patient_collection(&state.links, patients)))
}

#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<Arc<PatientState>>,
    Json(request): Json<Patient>,
) -> Result<Json<Patient>, AppError> {
    let patient = state.service.create_patient(request).await?;

    Ok(Json(patient))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<Arc<PatientState>>,
    Path(patient_id): Path<i32>,
) -> Result<Json<EntityModel<Patient>>, AppError> {
    let patient = state.service.get_patient(patient_id).await?;

    Ok(Json(patient_model(&state.links, patient)))
}

#[axum::debug_handler]
pub async fn replace_patient(
    State(state): State<Arc<PatientState>>,
    Path(patient_id): Path<i32>,
    Json(request): Json<Patient>,
) -> Result<Json<Patient>, AppError> {
    let patient = state.service.replace_patient(patient_id, request).await?;

    Ok(Json(patient))
}

#[axum::debug_handler]
pub async fn delete_patient(
    State(state): State<Arc<PatientState>>,
    Path(patient_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.service.delete_patient(patient_id).await?;

    Ok(StatusCode::OK)
}
