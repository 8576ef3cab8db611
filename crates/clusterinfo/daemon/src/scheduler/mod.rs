//! Periodic maintenance
//!
//! A [`Scheduler`] drives one [`Maintenance`] job on an interval. Jobs can be
//! switched off at runtime through [`JobControl`].

mod job_control;
mod reconciler;
mod runner;

pub use job_control::JobControl;
pub use reconciler::{ClusterInfoMaintainer, TickReport};
pub use runner::Scheduler;

use crate::error::MaintainerResult;
use async_trait::async_trait;

/// A job run periodically by the scheduler
#[async_trait]
pub trait Maintenance: Send + Sync {
    /// Name used for job control and logging
    fn name(&self) -> &str;

    /// Run one pass of the job
    async fn maintain(&self) -> MaintainerResult<()>;
}
