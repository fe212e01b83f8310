use std::{path::Path, sync::Arc};

use serde::Deserialize;
use serde_json::{Map, Value};
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;
use crate::truck::FoodTruck;

/// Snapshot file shape: a top-level `data` array of records.
#[derive(Deserialize)]
struct Snapshot {
    data: Vec<FoodTruck>,
}

/// In-memory, insertion-ordered collection of food-truck records.
///
/// Populated once from the bundled JSON snapshot and mutated in place for
/// the process lifetime; there is no write-back. Every mutation takes the
/// single write lock, so concurrent list/find scans never observe a
/// half-applied update.
#[derive(Clone)]
pub struct TruckStore {
    inner: Arc<RwLock<Vec<FoodTruck>>>,
}

impl TruckStore {
    /// Load the store from a snapshot file. Read exactly once; the file is
    /// never reloaded or written.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, ServiceError> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .await
            .map_err(|e| ServiceError::Dataset(format!("cannot read {}: {e}", path.display())))?;
        let snapshot: Snapshot = serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::Dataset(format!("invalid snapshot {}: {e}", path.display())))?;
        Ok(Self::from_records(snapshot.data))
    }

    /// Build a store from records already in memory.
    pub fn from_records(records: Vec<FoodTruck>) -> Self {
        Self { inner: Arc::new(RwLock::new(records)) }
    }

    /// All records in store order.
    pub async fn list(&self) -> Vec<FoodTruck> {
        self.inner.read().await.clone()
    }

    /// First record whose `locationid` matches.
    pub async fn find(&self, id: i64) -> Option<FoodTruck> {
        let records = self.inner.read().await;
        records.iter().find(|t| t.locationid == id).cloned()
    }

    /// Append a record; the key must not already be present.
    pub async fn insert(&self, truck: FoodTruck) -> Result<FoodTruck, ServiceError> {
        let mut records = self.inner.write().await;
        if records.iter().any(|t| t.locationid == truck.locationid) {
            return Err(ServiceError::Conflict(truck.locationid));
        }
        records.push(truck.clone());
        Ok(truck)
    }

    /// Shallow-merge `patch` into the first matching record, replacing it in
    /// place so store order is preserved. Never creates a record.
    pub async fn update_merge(
        &self,
        id: i64,
        patch: &Map<String, Value>,
    ) -> Result<FoodTruck, ServiceError> {
        let mut records = self.inner.write().await;
        let idx = records
            .iter()
            .position(|t| t.locationid == id)
            .ok_or(ServiceError::NotFound(id))?;
        let merged = records[idx].merge(patch);
        records[idx] = merged.clone();
        Ok(merged)
    }

    /// Remove the first matching record.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let mut records = self.inner.write().await;
        let idx = records
            .iter()
            .position(|t| t.locationid == id)
            .ok_or(ServiceError::NotFound(id))?;
        records.remove(idx);
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
