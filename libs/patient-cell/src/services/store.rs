use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Method;

use shared_database::supabase::{rest_path, MERGE_DUPLICATES, RETURN_REPRESENTATION};
use shared_database::{MemoryTable, SupabaseClient};

use crate::models::{Patient, PatientRow};

pub const PATIENTS_TABLE: &str = "patients";

/// Persistence port for patients.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Patient>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Patient>>;

    /// Inserts when `id` is 0, otherwise upserts at `id`.
    async fn save(&self, patient: Patient) -> Result<Patient>;

    /// Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: i32) -> Result<()>;
}

pub struct InMemoryPatientStore {
    table: MemoryTable<Patient>,
}

impl InMemoryPatientStore {
    pub fn new() -> Self {
        Self {
            table: MemoryTable::new(PATIENTS_TABLE),
        }
    }
}

impl Default for InMemoryPatientStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PatientStore for InMemoryPatientStore {
    async fn find_all(&self) -> Result<Vec<Patient>> {
        Ok(self.table.all().await)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Patient>> {
        Ok(self.table.get(id).await)
    }

    async fn save(&self, patient: Patient) -> Result<Patient> {
        self.table.upsert(patient).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        self.table.remove(id).await;
        Ok(())
    }
}

pub struct SupabasePatientStore {
    supabase: SupabaseClient,
}

impl SupabasePatientStore {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self { supabase }
    }
}

#[async_trait]
impl PatientStore for SupabasePatientStore {
    async fn find_all(&self) -> Result<Vec<Patient>> {
        let rows: Vec<PatientRow> = self
            .supabase
            .request(Method::GET, &rest_path(PATIENTS_TABLE, "select=*"), None)
            .await?;

        Ok(rows.into_iter().map(Patient::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Patient>> {
        let path = rest_path(PATIENTS_TABLE, &format!("id=eq.{}", id));
        let rows: Vec<PatientRow> = self.supabase.request(Method::GET, &path, None).await?;

        Ok(rows.into_iter().next().map(Patient::from))
    }

    async fn save(&self, patient: Patient) -> Result<Patient> {
        let row = PatientRow::from(patient);
        let (path, prefer) = match row.id {
            Some(_) => (rest_path(PATIENTS_TABLE, "on_conflict=id"), MERGE_DUPLICATES),
            None => (rest_path(PATIENTS_TABLE, ""), RETURN_REPRESENTATION),
        };

        let rows: Vec<PatientRow> = self
            .supabase
            .request_with_prefer(Method::POST, &path, Some(serde_json::to_value(&row)?), Some(prefer))
            .await?;

        rows.into_iter()
            .next()
            .map(Patient::from)
            .ok_or_else(|| anyhow!("Failed to save patient"))
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        let path = rest_path(PATIENTS_TABLE, &format!("id=eq.{}", id));
        self.supabase.execute(Method::DELETE, &path).await
    }
}
