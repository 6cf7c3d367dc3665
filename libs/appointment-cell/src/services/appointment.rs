use std::sync::Arc;

use tracing::{debug, info};

use crate::models::{Appointment, AppointmentError};
use crate::services::store::AppointmentStore;

#[derive(Clone)]
pub struct AppointmentService {
    store: Arc<dyn AppointmentStore>,
}

impl AppointmentService {
    pub fn new(store: Arc<dyn AppointmentStore>) -> Self {
        Self { store }
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, AppointmentError> {
        debug!("Listing appointments");
        Ok(self.store.find_all().await?)
    }

    pub async fn create_appointment(&self, mut appointment: Appointment) -> Result<Appointment, AppointmentError> {
        appointment.id = 0;
        let created = self.store.save(appointment).await?;

        info!(
            "Appointment {} created (patient: {:?}, doctor: {:?})",
            created.id,
            created.patient.as_ref().map(|p| p.id),
            created.doctor.as_ref().map(|d| d.id)
        );
        Ok(created)
    }

    pub async fn get_appointment(&self, id: i32) -> Result<Appointment, AppointmentError> {
        debug!("Fetching appointment: {}", id);

        self.store
            .find_by_id(id)
            .await?
            .ok_or(AppointmentError::NotFound(id))
    }

    /// Replaces type, date, patient and doctor of an existing appointment,
    /// or creates the appointment at `id`. Not atomic: concurrent replaces of
    /// the same id are last-writer-wins.
    pub async fn replace_appointment(
        &self,
        id: i32,
        replacement: Appointment,
    ) -> Result<Appointment, AppointmentError> {
        let appointment = match self.store.find_by_id(id).await? {
            Some(mut existing) => {
                debug!("Replacing appointment: {}", id);
                existing.apply(replacement);
                existing
            }
            None => {
                debug!("Appointment {} not found, creating it", id);
                Appointment { id, ..replacement }
            }
        };

        Ok(self.store.save(appointment).await?)
    }

    pub async fn delete_appointment(&self, id: i32) -> Result<(), AppointmentError> {
        debug!("Deleting appointment: {}", id);
        Ok(self.store.delete_by_id(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::store::MockAppointmentStore;
    use assert_matches::assert_matches;
    use doctor_cell::Doctor;
    use mockall::predicate::eq;
    use patient_cell::Patient;

    fn appointment(id: i32, kind: &str, patient_id: i32) -> Appointment {
        Appointment {
            id,
            kind: kind.to_string(),
            date: None,
            patient: Some(Patient { id: patient_id, ..Patient::default() }),
            doctor: Some(Doctor { id: 1, ..Doctor::default() }),
        }
    }

    #[tokio::test]
    async fn test_replace_existing_swaps_owned_entities() {
        let mut store = MockAppointmentStore::new();
        store
            .expect_find_by_id()
            .with(eq(3))
            .returning(|id| Ok(Some(appointment(id, "Emergency", 1))));
        store
            .expect_save()
            .withf(|a| a.id == 3 && a.kind == "Routine Check" && a.patient.as_ref().map(|p| p.id) == Some(2))
            .times(1)
            .returning(Ok);

        let service = AppointmentService::new(Arc::new(store));
        let replaced = service
            .replace_appointment(3, appointment(0, "Routine Check", 2))
            .await
            .unwrap();

        assert_eq!(replaced.id, 3);
    }

    #[tokio::test]
    async fn test_replace_missing_creates_at_path_id() {
        let mut store = MockAppointmentStore::new();
        store.expect_find_by_id().returning(|_| Ok(None));
        store
            .expect_save()
            .withf(|a| a.id == 6)
            .times(1)
            .returning(Ok);

        let service = AppointmentService::new(Arc::new(store));
        let created = service
            .replace_appointment(6, appointment(1, "Routine Check", 1))
            .await
            .unwrap();

        assert_eq!(created.id, 6);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let mut store = MockAppointmentStore::new();
        store.expect_find_by_id().returning(|_| Ok(None));

        let service = AppointmentService::new(Arc::new(store));
        assert_matches!(service.get_appointment(4).await, Err(AppointmentError::NotFound(4)));
    }

    #[tokio::test]
    async fn test_create_resets_id() {
        let mut store = MockAppointmentStore::new();
        store
            .expect_save()
            .withf(|a| a.id == 0)
            .returning(|a| Ok(Appointment { id: 10, ..a }));

        let service = AppointmentService::new(Arc::new(store));
        let created = service
            .create_appointment(appointment(77, "Routine Check", 1))
            .await
            .unwrap();

        assert_eq!(created.id, 10);
    }
}
