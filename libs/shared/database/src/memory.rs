use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use tokio::sync::RwLock;
use tracing::debug;

/// A row with an integer identity. An id of `0` means none has been assigned yet.
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);
}

#[derive(Debug)]
struct TableState<T> {
    rows: BTreeMap<i32, T>,
    last_id: i32,
}

/// In-process table with identity-column semantics.
///
/// Generated ids increase monotonically and are never reused, even after a
/// delete. Upserting at an explicit id moves the identity counter past it so
/// later generated ids cannot collide.
#[derive(Debug)]
pub struct MemoryTable<T> {
    name: &'static str,
    state: RwLock<TableState<T>>,
}

impl<T: Record> MemoryTable<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: RwLock::new(TableState {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }

    /// All rows in ascending id order.
    pub async fn all(&self) -> Vec<T> {
        self.state.read().await.rows.values().cloned().collect()
    }

    pub async fn get(&self, id: i32) -> Option<T> {
        self.state.read().await.rows.get(&id).cloned()
    }

    /// Fails once the identity counter has reached `i32::MAX`.
    pub async fn upsert(&self, mut row: T) -> Result<T> {
        let mut state = self.state.write().await;

        if row.id() == 0 {
            state.last_id = state
                .last_id
                .checked_add(1)
                .ok_or_else(|| anyhow!("{}: identity exhausted", self.name))?;
            row.set_id(state.last_id);
            debug!("{}: inserted row {}", self.name, row.id());
        } else {
            state.last_id = state.last_id.max(row.id());
            debug!("{}: upserted row {}", self.name, row.id());
        }

        state.rows.insert(row.id(), row.clone());
        Ok(row)
    }

    pub async fn remove(&self, id: i32) -> Option<T> {
        let removed = self.state.write().await.rows.remove(&id);
        if removed.is_some() {
            debug!("{}: deleted row {}", self.name, id);
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }
}
