use std::sync::Arc;

use tracing::debug;

use crate::models::{Patient, PatientError};
use crate::services::store::PatientStore;

#[derive(Clone)]
pub struct PatientService {
    store: Arc<dyn PatientStore>,
}

impl PatientService {
    pub fn new(store: Arc<dyn PatientStore>) -> Self {
        Self { store }
    }

    pub async fn list_patients(&self) -> Result<Vec<Patient>, PatientError> {
        debug!("Listing patients");
        Ok(self.store.find_all().await?)
    }

    pub async fn create_patient(&self, mut patient: Patient) -> Result<Patient, PatientError> {
        debug!("Creating patient: {}", patient.full_name());

        patient.id = 0;
        let created = self.store.save(patient).await?;

        debug!("Patient created with ID: {}", created.id);
        Ok(created)
    }

    pub async fn get_patient(&self, id: i32) -> Result<Patient, PatientError> {
        debug!("Fetching patient: {}", id);

        self.store
            .find_by_id(id)
            .await?
            .ok_or(PatientError::NotFound(id))
    }

    /// Overwrites everything but the id of an existing patient, or creates one at `id`.
    pub async fn replace_patient(&self, id: i32, replacement: Patient) -> Result<Patient, PatientError> {
        let patient = match self.store.find_by_id(id).await? {
            Some(mut existing) => {
                debug!("Replacing patient: {}", id);
                existing.apply(replacement);
                existing
            }
            None => {
                debug!("Patient {} not found, creating it", id);
                Patient { id, ..replacement }
            }
        };

        Ok(self.store.save(patient).await?)
    }

    pub async fn delete_patient(&self, id: i32) -> Result<(), PatientError> {
        debug!("Deleting patient: {}", id);
        Ok(self.store.delete_by_id(id).await?)
    }
}
