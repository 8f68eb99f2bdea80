pub mod lines;
pub mod routes;
pub mod stops;

use std::{future::Future, time::Instant};
use tracing::{debug, error, info};

use crate::{
    backup::{Backup, write_atomic},
    config::Config,
    error::Error,
};

/// Runs one job around a backup of its output file. The job produces the
/// full file contents; they only replace the previous output once the job
/// has succeeded, and the backup is restored on any failure.
pub async fn run<Fut>(name: &str, config: &Config, file_name: &str, job: Fut) -> Result<(), Error>
where
    Fut: Future<Output = Result<String, Error>>,
{
    info!("Running {name} job...");
    let now = Instant::now();
    let target = config.output_path(file_name);
    let backup = Backup::prepare(&target, config.backup_path(file_name)).await?;
    if !backup.is_saved() {
        debug!("No previous {} to back up", target.display());
    }

    let result = async {
        let contents = job.await?;
        write_atomic(&target, contents.as_bytes()).await
    }
    .await;

    match &result {
        Ok(()) => info!(
            "Job {name} wrote {} in {:?}",
            target.display(),
            now.elapsed()
        ),
        Err(err) => {
            error!("Job {name} failed: {err}");
            backup.restore().await;
        }
    }
    result
}
