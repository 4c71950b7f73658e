//! Background job scheduler.
//!
//! Initialises a [`JobScheduler`] at server startup and registers the idle
//! sweep over wizard sessions and rate-limit windows.

use std::time::Duration;

use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::{middleware::RateLimitState, sessions::SessionStore};

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive for
/// the lifetime of the process. Dropping it shuts down all scheduled jobs.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised, the
/// job cannot be registered, or the scheduler fails to start.
pub async fn build_scheduler(
    sessions: SessionStore,
    rate_limit: RateLimitState,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;
    register_idle_sweep(&scheduler, sessions, rate_limit).await?;
    scheduler.start().await?;
    Ok(scheduler)
}

/// Evict idle wizard sessions and expired rate-limit windows once a minute.
async fn register_idle_sweep(
    scheduler: &JobScheduler,
    sessions: SessionStore,
    rate_limit: RateLimitState,
) -> Result<(), JobSchedulerError> {
    let job = Job::new_repeated_async(SWEEP_INTERVAL, move |_uuid, _lock| {
        let sessions = sessions.clone();
        let rate_limit = rate_limit.clone();

        Box::pin(async move {
            let evicted = sessions.evict_idle().await;
            if evicted > 0 {
                let remaining = sessions.len().await;
                tracing::info!(evicted, remaining, "scheduler: idle session sweep complete");
            } else {
                tracing::debug!("scheduler: idle session sweep found nothing to evict");
            }

            let pruned = rate_limit.prune().await;
            if pruned > 0 {
                let clients = rate_limit.tracked_clients().await;
                tracing::debug!(pruned, clients, "scheduler: expired rate-limit windows dropped");
            }
        })
    })?;

    scheduler.add(job).await?;
    Ok(())
}
