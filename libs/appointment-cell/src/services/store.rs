use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::Method;
use tracing::debug;

use doctor_cell::DoctorStore;
use patient_cell::PatientStore;
use shared_database::supabase::{rest_path, MERGE_DUPLICATES, RETURN_REPRESENTATION};
use shared_database::{MemoryTable, Record, SupabaseClient};

use crate::models::{Appointment, AppointmentRow, AppointmentWithOwners};

pub const APPOINTMENTS_TABLE: &str = "appointments";
const EMBED_OWNERS: &str = "select=*,patient:patients(*),doctor:doctors(*)";

/// Persistence port for appointments. Saving an appointment also saves its
/// patient and doctor through their own stores.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Appointment>>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Appointment>>;
    async fn save(&self, appointment: Appointment) -> Result<Appointment>;
    async fn delete_by_id(&self, id: i32) -> Result<()>;
}

/// Saves the owned patient and doctor first so the appointment row can
/// reference their ids.
async fn save_owned(
    patients: &dyn PatientStore,
    doctors: &dyn DoctorStore,
    appointment: Appointment,
) -> Result<Appointment> {
    let patient = match appointment.patient {
        Some(patient) => Some(patients.save(patient).await?),
        None => None,
    };
    let doctor = match appointment.doctor {
        Some(doctor) => Some(doctors.save(doctor).await?),
        None => None,
    };

    Ok(Appointment {
        patient,
        doctor,
        ..appointment
    })
}

pub struct InMemoryAppointmentStore {
    table: MemoryTable<AppointmentRow>,
    patients: Arc<dyn PatientStore>,
    doctors: Arc<dyn DoctorStore>,
}

impl InMemoryAppointmentStore {
    pub fn new(patients: Arc<dyn PatientStore>, doctors: Arc<dyn DoctorStore>) -> Self {
        Self {
            table: MemoryTable::new(APPOINTMENTS_TABLE),
            patients,
            doctors,
        }
    }

    // Owned rows deleted elsewhere come back as None.
    async fn hydrate(&self, row: AppointmentRow) -> Result<Appointment> {
        let patient = match row.patient_id {
            Some(id) => self.patients.find_by_id(id).await?,
            None => None,
        };
        let doctor = match row.doctor_id {
            Some(id) => self.doctors.find_by_id(id).await?,
            None => None,
        };

        Ok(Appointment {
            id: row.id(),
            kind: row.kind,
            date: row.date,
            patient,
            doctor,
        })
    }
}

#[async_trait]
impl AppointmentStore for InMemoryAppointmentStore {
    async fn find_all(&self) -> Result<Vec<Appointment>> {
        let rows = self.table.all().await;
        try_join_all(rows.into_iter().map(|row| self.hydrate(row))).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Appointment>> {
        match self.table.get(id).await {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn save(&self, appointment: Appointment) -> Result<Appointment> {
        let appointment = save_owned(self.patients.as_ref(), self.doctors.as_ref(), appointment).await?;
        let row = self.table.upsert(AppointmentRow::from(&appointment)).await?;

        Ok(Appointment {
            id: row.id(),
            ..appointment
        })
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        self.table.remove(id).await;
        Ok(())
    }
}

pub struct SupabaseAppointmentStore {
    supabase: SupabaseClient,
    patients: Arc<dyn PatientStore>,
    doctors: Arc<dyn DoctorStore>,
}

impl SupabaseAppointmentStore {
    pub fn new(
        supabase: SupabaseClient,
        patients: Arc<dyn PatientStore>,
        doctors: Arc<dyn DoctorStore>,
    ) -> Self {
        Self {
            supabase,
            patients,
            doctors,
        }
    }
}

#[async_trait]
impl AppointmentStore for SupabaseAppointmentStore {
    async fn find_all(&self) -> Result<Vec<Appointment>> {
        let rows: Vec<AppointmentWithOwners> = self
            .supabase
            .request(Method::GET, &rest_path(APPOINTMENTS_TABLE, EMBED_OWNERS), None)
            .await?;

        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Appointment>> {
        let path = rest_path(APPOINTMENTS_TABLE, &format!("{}&id=eq.{}", EMBED_OWNERS, id));
        let rows: Vec<AppointmentWithOwners> = self.supabase.request(Method::GET, &path, None).await?;

        Ok(rows.into_iter().next().map(Appointment::from))
    }

    async fn save(&self, appointment: Appointment) -> Result<Appointment> {
        let appointment = save_owned(self.patients.as_ref(), self.doctors.as_ref(), appointment).await?;
        let row = AppointmentRow::from(&appointment);
        debug!(
            "Saving appointment row (patient: {:?}, doctor: {:?})",
            row.patient_id, row.doctor_id
        );

        let (path, prefer) = match row.id {
            Some(_) => (rest_path(APPOINTMENTS_TABLE, "on_conflict=id"), MERGE_DUPLICATES),
            None => (rest_path(APPOINTMENTS_TABLE, ""), RETURN_REPRESENTATION),
        };

        let saved: Vec<AppointmentRow> = self
            .supabase
            .request_with_prefer(Method::POST, &path, Some(serde_json::to_value(&row)?), Some(prefer))
            .await?;

        let saved = saved
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Failed to save appointment"))?;

        Ok(Appointment {
            id: saved.id(),
            ..appointment
        })
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        let path = rest_path(APPOINTMENTS_TABLE, &format!("id=eq.{}", id));
        self.supabase.execute(Method::DELETE, &path).await
    }
}
