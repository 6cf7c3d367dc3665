use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Method;

use shared_database::supabase::{rest_path, MERGE_DUPLICATES, RETURN_REPRESENTATION};
use shared_database::{MemoryTable, SupabaseClient};

use crate::models::{Doctor, DoctorRow};

pub const DOCTORS_TABLE: &str = "doctors";

/// Persistence port for doctors. `save` inserts on id 0 and upserts otherwise;
/// `delete_by_id` is a no-op for unknown ids.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DoctorStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Doctor>>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Doctor>>;
    async fn save(&self, doctor: Doctor) -> Result<Doctor>;
    async fn delete_by_id(&self, id: i32) -> Result<()>;
}

pub struct InMemoryDoctorStore {
    table: MemoryTable<Doctor>,
}

impl InMemoryDoctorStore {
    pub fn new() -> Self {
        Self {
            table: MemoryTable::new(DOCTORS_TABLE),
        }
    }
}

impl Default for InMemoryDoctorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DoctorStore for InMemoryDoctorStore {
    async fn find_all(&self) -> Result<Vec<Doctor>> {
        Ok(self.table.all().await)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Doctor>> {
        Ok(self.table.get(id).await)
    }

    async fn save(&self, doctor: Doctor) -> Result<Doctor> {
        self.table.upsert(doctor).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        self.table.remove(id).await;
        Ok(())
    }
}

pub struct SupabaseDoctorStore {
    supabase: SupabaseClient,
}

impl SupabaseDoctorStore {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self { supabase }
    }

    fn by_id(id: i32) -> String {
        rest_path(DOCTORS_TABLE, &format!("id=eq.{}", id))
    }
}

#[async_trait]
impl DoctorStore for SupabaseDoctorStore {
    async fn find_all(&self) -> Result<Vec<Doctor>> {
        let rows: Vec<DoctorRow> = self
            .supabase
            .request(Method::GET, &rest_path(DOCTORS_TABLE, "select=*"), None)
            .await?;

        Ok(rows.into_iter().map(Doctor::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Doctor>> {
        let rows: Vec<DoctorRow> = self.supabase.request(Method::GET, &Self::by_id(id), None).await?;

        Ok(rows.into_iter().next().map(Doctor::from))
    }

    async fn save(&self, doctor: Doctor) -> Result<Doctor> {
        let row = DoctorRow::from(doctor);
        let (path, prefer) = if row.id.is_some() {
            (rest_path(DOCTORS_TABLE, "on_conflict=id"), MERGE_DUPLICATES)
        } else {
            (rest_path(DOCTORS_TABLE, ""), RETURN_REPRESENTATION)
        };

        let rows: Vec<DoctorRow> = self
            .supabase
            .request_with_prefer(Method::POST, &path, Some(serde_json::to_value(&row)?), Some(prefer))
            .await?;

        rows.into_iter()
            .next()
            .map(Doctor::from)
            .ok_or_else(|| anyhow!("Failed to save doctor"))
    }

    async fn delete_by_id(&self, id: i32) -> Result<()> {
        self.supabase.execute(Method::DELETE, &Self::by_id(id)).await
    }
}
