//! Runtime activation of maintenance jobs

use dashmap::DashSet;

/// Tracks which maintenance jobs are deactivated, by job name
#[derive(Debug, Default)]
pub struct JobControl {
    inactive: DashSet<String>,
}

impl JobControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop running a job until it is activated again
    pub fn deactivate(&self, job: &str) {
        if self.inactive.insert(job.to_string()) {
            tracing::info!(job = job, "Deactivated maintenance job");
        }
    }

    pub fn activate(&self, job: &str) {
        if self.inactive.remove(job).is_some() {
            tracing::info!(job = job, "Activated maintenance job");
        }
    }

    pub fn is_active(&self, job: &str) -> bool {
        !self.inactive.contains(job)
    }
}
