//! Application directory trait definitions

use crate::error::StorageResult;
use async_trait::async_trait;
use clusterinfo_types::{Application, ApplicationId};
use std::any::Any;
use std::fmt;

/// Exclusive update lock on one application record.
///
/// The lock is released when the value is dropped, on every exit path.
pub struct ApplicationLock {
    application: ApplicationId,
    _guard: Box<dyn Any + Send + Sync>,
}

impl ApplicationLock {
    /// Wrap a backend-specific guard that releases the lock on drop
    pub fn new(application: ApplicationId, guard: impl Any + Send + Sync) -> Self {
        Self {
            application,
            _guard: Box::new(guard),
        }
    }

    /// The application this lock is held for
    pub fn application(&self) -> &ApplicationId {
        &self.application
    }
}

impl fmt::Debug for ApplicationLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationLock")
            .field("application", &self.application)
            .finish()
    }
}

/// Directory of applications and the records cluster info is stored on
#[async_trait]
pub trait ApplicationDirectory: Send + Sync {
    /// List all known applications
    async fn list_applications(&self) -> StorageResult<Vec<Application>>;

    /// Get the current record of an application
    async fn get_application(&self, id: &ApplicationId) -> StorageResult<Option<Application>>;

    /// Acquire the exclusive update lock of an application, waiting if held
    async fn lock(&self, id: &ApplicationId) -> StorageResult<ApplicationLock>;

    /// Replace an application record; `lock` must be held for that application
    async fn store(&self, application: Application, lock: &ApplicationLock) -> StorageResult<()>;
}
