use std::sync::Arc;

use tracing::debug;

use crate::models::{Doctor, DoctorError};
use crate::services::store::DoctorStore;

#[derive(Clone)]
pub struct DoctorService {
    store: Arc<dyn DoctorStore>,
}

impl DoctorService {
    pub fn new(store: Arc<dyn DoctorStore>) -> Self {
        Self { store }
    }

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, DoctorError> {
        let doctors = self.store.find_all().await?;
        debug!("Found {} doctors", doctors.len());
        Ok(doctors)
    }

    pub async fn create_doctor(&self, mut doctor: Doctor) -> Result<Doctor, DoctorError> {
        debug!("Creating doctor: {} ({})", doctor.full_name(), doctor.specialty);

        doctor.id = 0;
        Ok(self.store.save(doctor).await?)
    }

    pub async fn get_doctor(&self, id: i32) -> Result<Doctor, DoctorError> {
        debug!("Fetching doctor: {}", id);

        match self.store.find_by_id(id).await? {
            Some(doctor) => Ok(doctor),
            None => Err(DoctorError::NotFound(id)),
        }
    }

    /// PUT semantics: copy onto the stored doctor, or create one at `id`.
    pub async fn replace_doctor(&self, id: i32, replacement: Doctor) -> Result<Doctor, DoctorError> {
        debug!("Replacing doctor: {}", id);

        let doctor = match self.store.find_by_id(id).await? {
            Some(mut existing) => {
                existing.apply(replacement);
                existing
            }
            None => Doctor { id, ..replacement },
        };

        Ok(self.store.save(doctor).await?)
    }

    pub async fn delete_doctor(&self, id: i32) -> Result<(), DoctorError> {
        debug!("Deleting doctor: {}", id);
        self.store.delete_by_id(id).await?;
        Ok(())
    }
}
