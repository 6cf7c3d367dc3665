use serde::{Deserialize, Serialize};

use shared_database::Record;
use shared_models::AppError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Patient {
    pub id: i32,
    pub first_name: String,
    pub surname: String,
    pub age: i32,
    pub phone_number: String,
    pub email: String,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname)
    }

    /// Copies every field except `id` from `replacement`.
    pub fn apply(&mut self, replacement: Patient) {
        self.first_name = replacement.first_name;
        self.surname = replacement.surname;
        self.age = replacement.age;
        self.phone_number = replacement.phone_number;
        self.email = replacement.email;
    }
}

impl Record for Patient {
    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

/// Row layout of the `patients` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(deserialize_with = "shared_database::null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "shared_database::null_as_default")]
    pub surname: String,
    #[serde(deserialize_with = "shared_database::null_as_default")]
    pub age: i32,
    #[serde(deserialize_with = "shared_database::null_as_default")]
    pub phone_number: String,
    #[serde(deserialize_with = "shared_database::null_as_default")]
    pub email: String,
}

impl From<Patient> for PatientRow {
    fn from(patient: Patient) -> Self {
        Self {
            id: (patient.id != 0).then_some(patient.id),
            first_name: patient.first_name,
            surname: patient.surname,
            age: patient.age,
            phone_number: patient.phone_number,
            email: patient.email,
        }
    }
}

impl From<PatientRow> for Patient {
    fn from(row: PatientRow) -> Self {
        Self {
            id: row.id.unwrap_or_default(),
            first_name: row.first_name,
            surname: row.surname,
            age: row.age,
            phone_number: row.phone_number,
            email: row.email,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PatientError {
    #[error("Patient not found: {0}")]
    NotFound(i32),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl From<PatientError> for AppError {
    fn from(err: PatientError) -> Self {
        match err {
            PatientError::NotFound(_) => AppError::NotFound(err.to_string()),
            PatientError::Storage(e) => AppError::Database(e.to_string()),
        }
    }
}
