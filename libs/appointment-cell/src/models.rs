use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use doctor_cell::{Doctor, DoctorRow};
use patient_cell::{Patient, PatientRow};
use shared_database::Record;
use shared_models::AppError;

/// A visit of one patient to one doctor. The appointment owns both: saving
/// it saves them too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Appointment {
    pub id: i32,
    /// e.g. "Routine Check", "Emergency"
    #[serde(rename = "type")]
    pub kind: String,
    pub date: Option<DateTime<Utc>>,
    pub patient: Option<Patient>,
    pub doctor: Option<Doctor>,
}

impl Appointment {
    /// Copies every field except `id`. Patient and doctor are taken wholesale.
    pub fn apply(&mut self, replacement: Appointment) {
        self.kind = replacement.kind;
        self.date = replacement.date;
        self.patient = replacement.patient;
        self.doctor = replacement.doctor;
    }
}

/// Row layout of the `appointments` table; owned entities are referenced by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(rename = "type", default, deserialize_with = "shared_database::null_as_default")]
    pub kind: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub patient_id: Option<i32>,
    #[serde(default)]
    pub doctor_id: Option<i32>,
}

impl From<&Appointment> for AppointmentRow {
    fn from(appointment: &Appointment) -> Self {
        Self {
            id: (appointment.id != 0).then_some(appointment.id),
            kind: appointment.kind.clone(),
            date: appointment.date,
            patient_id: appointment.patient.as_ref().map(|p| p.id),
            doctor_id: appointment.doctor.as_ref().map(|d| d.id),
        }
    }
}

impl Record for AppointmentRow {
    fn id(&self) -> i32 {
        self.id.unwrap_or_default()
    }

    fn set_id(&mut self, id: i32) {
        self.id = Some(id);
    }
}

/// An appointment row with its owned rows embedded by PostgREST.
#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentWithOwners {
    #[serde(flatten)]
    pub row: AppointmentRow,
    #[serde(default)]
    pub patient: Option<PatientRow>,
    #[serde(default)]
    pub doctor: Option<DoctorRow>,
}

impl From<AppointmentWithOwners> for Appointment {
    fn from(joined: AppointmentWithOwners) -> Self {
        Self {
            id: joined.row.id(),
            kind: joined.row.kind,
            date: joined.row.date,
            patient: joined.patient.map(Patient::from),
            doctor: joined.doctor.map(Doctor::from),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found: {0}")]
    NotFound(i32),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound(_) => AppError::NotFound(err.to_string()),
            AppointmentError::Storage(e) => AppError::Database(e.to_string()),
        }
    }
}
