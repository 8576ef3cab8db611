//! In-memory application directory

use super::traits::{ApplicationDirectory, ApplicationLock};
use crate::error::{StorageError, StorageResult};
use async_trait::async_trait;
use clusterinfo_types::{Application, ApplicationId};
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory directory for development and testing
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    applications: DashMap<ApplicationId, Application>,
    locks: DashMap<ApplicationId, Arc<Mutex<()>>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory holding the given applications
    pub fn with_applications(applications: impl IntoIterator<Item = Application>) -> Self {
        let directory = Self::new();
        for application in applications {
            directory.insert(application);
        }
        directory
    }

    /// Insert or replace an application without taking its lock
    pub fn insert(&self, application: Application) {
        self.applications.insert(application.id.clone(), application);
    }

    /// Remove an application; its lock entry goes once no holder remains
    pub fn remove(&self, id: &ApplicationId) -> Option<Application> {
        let removed = self.applications.remove(id).map(|(_, application)| application);
        self.prune_locks();
        removed
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    fn lock_for(&self, id: &ApplicationId) -> Arc<Mutex<()>> {
        self.locks.entry(id.clone()).or_default().clone()
    }

    /// Drop lock entries of unknown applications that nobody holds or awaits
    fn prune_locks(&self) {
        self.locks.retain(|id, mutex| {
            Arc::strong_count(mutex) > 1 || self.applications.contains_key(id)
        });
    }

    #[cfg(test)]
    fn lock_entries(&self) -> usize {
        self.locks.len()
    }
}

#[async_trait]
impl ApplicationDirectory for InMemoryDirectory {
    async fn list_applications(&self) -> StorageResult<Vec<Application>> {
        self.prune_locks();

        let mut applications: Vec<Application> = self
            .applications
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        applications.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(applications)
    }

    async fn get_application(&self, id: &ApplicationId) -> StorageResult<Option<Application>> {
        Ok(self.applications.get(id).map(|entry| entry.value().clone()))
    }

    async fn lock(&self, id: &ApplicationId) -> StorageResult<ApplicationLock> {
        // The DashMap shard guard is released before awaiting the mutex.
        let mutex = self.lock_for(id);
        let guard = mutex.lock_owned().await;
        tracing::trace!(application = %id, "Acquired application lock");
        Ok(ApplicationLock::new(id.clone(), guard))
    }

    async fn store(&self, application: Application, lock: &ApplicationLock) -> StorageResult<()> {
        if lock.application() != &application.id {
            return Err(StorageError::LockMismatch {
                held: lock.application().clone(),
                target: application.id.clone(),
            });
        }
        self.applications.insert(application.id.clone(), application);
        Ok(())
    }
}
