use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info};

use crate::error::Error;

/// Snapshot of an output file taken before a job overwrites it.
pub struct Backup {
    target: PathBuf,
    backup: PathBuf,
    saved: bool,
}

impl Backup {
    /// Copies `target` to `backup` if it exists. A missing target is not an
    /// error, there is simply nothing to restore later.
    pub async fn prepare<P: AsRef<Path>, Q: AsRef<Path>>(target: P, backup: Q) -> Result<Self, Error> {
        let target = target.as_ref().to_path_buf();
        let backup = backup.as_ref().to_path_buf();
        let saved = fs::try_exists(&target).await?;
        if saved {
            fs::copy(&target, &backup).await?;
        }
        Ok(Self {
            target,
            backup,
            saved,
        })
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Puts the snapshot back in place of the target.
    pub async fn restore(&self) {
        if !self.saved {
            return;
        }
        info!("Restoring backup of {}", self.target.display());
        if let Err(err) = fs::copy(&self.backup, &self.target).await {
            error!("Failed to restore {}: {err}", self.target.display());
        }
    }
}

/// Writes the whole file next to its destination and renames it over the
/// target, so readers never see a partial file.
pub async fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<(), Error> {
    let path = path.as_ref();
    let mut temporary = path.as_os_str().to_owned();
    temporary.push(".tmp");
    fs::write(&temporary, contents).await?;
    if let Err(err) = fs::rename(&temporary, path).await {
        let _ = fs::remove_file(&temporary).await;
        return Err(err.into());
    }
    Ok(())
}
