use std::sync::Arc;

use tracing::info;

use appointment_cell::{AppointmentStore, InMemoryAppointmentStore, SupabaseAppointmentStore};
use doctor_cell::{DoctorStore, InMemoryDoctorStore, SupabaseDoctorStore};
use patient_cell::{InMemoryPatientStore, PatientStore, SupabasePatientStore};
use shared_config::{AppConfig, StorageBackend};
use shared_database::SupabaseClient;

/// The storage ports every cell is wired to.
#[derive(Clone)]
pub struct Stores {
    pub patients: Arc<dyn PatientStore>,
    pub doctors: Arc<dyn DoctorStore>,
    pub appointments: Arc<dyn AppointmentStore>,
}

impl Stores {
    pub fn from_config(config: &AppConfig) -> Self {
        match config.storage_backend {
            StorageBackend::Memory => Self::in_memory(),
            StorageBackend::Supabase => Self::supabase(SupabaseClient::new(config)),
        }
    }

    pub fn in_memory() -> Self {
        info!("Using in-memory storage");

        let patients: Arc<dyn PatientStore> = Arc::new(InMemoryPatientStore::new());
        let doctors: Arc<dyn DoctorStore> = Arc::new(InMemoryDoctorStore::new());
        let appointments = Arc::new(InMemoryAppointmentStore::new(patients.clone(), doctors.clone()));

        Self {
            patients,
            doctors,
            appointments,
        }
    }

    pub fn supabase(client: SupabaseClient) -> Self {
        info!("Using Supabase storage at {}", client.get_base_url());

        let patients: Arc<dyn PatientStore> = Arc::new(SupabasePatientStore::new(client.clone()));
        let doctors: Arc<dyn DoctorStore> = Arc::new(SupabaseDoctorStore::new(client.clone()));
        let appointments = Arc::new(SupabaseAppointmentStore::new(
            client,
            patients.clone(),
            doctors.clone(),
        ));

        Self {
            patients,
            doctors,
            appointments,
        }
    }
}
