use serde::{Deserialize, Serialize};

use shared_database::Record;
use shared_models::AppError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Doctor {
    pub id: i32,
    pub first_name: String,
    pub surname: String,
    pub phone_number: String,
    /// e.g. "Cardiology", "Neurology"
    pub specialty: String,
}

impl Doctor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }

    /// Copies every field except `id` from `replacement`.
    pub fn apply(&mut self, replacement: Doctor) {
        self.first_name = replacement.first_name;
        self.surname = replacement.surname;
        self.phone_number = replacement.phone_number;
        self.specialty = replacement.specialty;
    }
}

impl Record for Doctor {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

/// Row layout of the `doctors` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(deserialize_with = "shared_database::null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "shared_database::null_as_default")]
    pub surname: String,
    #[serde(deserialize_with = "shared_database::null_as_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "shared_database::null_as_default")]
    pub specialty: String,
}

impl From<Doctor> for DoctorRow {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: (doctor.id != 0).then_some(doctor.id),
            first_name: doctor.first_name,
            surname: doctor.surname,
            phone_number: doctor.phone_number,
            specialty: doctor.specialty,
        }
    }
}

impl From<DoctorRow> for Doctor {
    fn from(row: DoctorRow) -> Self {
        Self {
            id: row.id.unwrap_or_default(),
            first_name: row.first_name,
            surname: row.surname,
            phone_number: row.phone_number,
            specialty: row.specialty,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor not found: {0}")]
    NotFound(i32),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound(_) => AppError::NotFound(err.to_string()),
            DoctorError::Storage(e) => AppError::Database(e.to_string()),
        }
    }
}
