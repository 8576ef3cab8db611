//! Interval scheduler for maintenance jobs

use super::job_control::JobControl;
use super::Maintenance;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tokio::time::{interval, Duration, MissedTickBehavior};

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Runs one maintenance job at a fixed interval
pub struct Scheduler {
    job: Arc<dyn Maintenance>,
    job_control: Arc<JobControl>,
    period: Duration,
    trigger_tx: mpsc::Sender<()>,
    running: Arc<RwLock<bool>>,
}

impl Scheduler {
    /// Create a new scheduler. A zero period is raised to one millisecond.
    pub fn new(
        job: Arc<dyn Maintenance>,
        job_control: Arc<JobControl>,
        period: Duration,
    ) -> (Arc<Self>, mpsc::Receiver<()>) {
        let (trigger_tx, trigger_rx) = mpsc::channel(10);
        let period = period.max(MIN_PERIOD);

        let scheduler = Arc::new(Self {
            job,
            job_control,
            period,
            trigger_tx,
            running: Arc::new(RwLock::new(true)),
        });

        (scheduler, trigger_rx)
    }

    /// Request an immediate tick
    pub async fn trigger(&self) {
        let _ = self.trigger_tx.send(()).await;
    }

    /// Tick until stopped. The first tick runs immediately unless `stop` was
    /// already called.
    pub async fn start(self: Arc<Self>, mut trigger_rx: mpsc::Receiver<()>) {
        tracing::info!(
            job = self.job.name(),
            interval_secs = self.period.as_secs(),
            "Scheduler started"
        );

        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                received = trigger_rx.recv() => {
                    if received.is_none() {
                        break;
                    }
                }
            }

            if !*self.running.read().await {
                break;
            }

            self.tick().await;
        }

        tracing::info!(job = self.job.name(), "Scheduler stopped");
    }

    /// Stop the scheduler; a tick in progress runs to completion
    pub async fn stop(&self) {
        {
            let mut running = self.running.write().await;
            *running = false;
        }
        let _ = self.trigger_tx.try_send(());
    }

    async fn tick(&self) {
        let name = self.job.name();
        if !self.job_control.is_active(name) {
            tracing::debug!(job = name, "Job deactivated, skipping tick");
            return;
        }

        if let Err(e) = self.job.maintain().await {
            tracing::error!(job = name, error = %e, "Maintenance failed");
        }
    }
}
