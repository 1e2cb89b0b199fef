use crate::infrastructure::storage::traits::StorageService;
use chrono::{Duration as ChronoDuration, Utc};
use std::{sync::Arc, time::Duration};

/// Deletes composites older than the retention window.
pub struct OutputSweeper {
    storage: Arc<dyn StorageService>,
    retention: ChronoDuration,
    interval_seconds: u64,
}

impl OutputSweeper {
    pub fn new(
        storage: Arc<dyn StorageService>,
        retention_minutes: i64,
        interval_seconds: u64,
    ) -> Self {
        Self {
            storage,
            retention: ChronoDuration::minutes(retention_minutes.max(1)),
            interval_seconds: interval_seconds.max(10),
        }
    }

    /// Runs one pass and returns how many composites were removed.
    pub async fn sweep_once(&self) -> anyhow::Result<usize> {
        let cutoff = Utc::now() - self.retention;
        let mut removed = 0;

        for object in self.storage.list().await? {
            if !object.key.ends_with(".jpg") || object.modified >= cutoff {
                continue;
            }
            match self.storage.delete(&object.key).await {
                Ok(()) => removed += 1,
                Err(err) => tracing::warn!("Failed to expire {}: {:#}", object.key, err),
            }
        }

        if removed > 0 {
            tracing::info!("Expired {} composites older than {}", removed, cutoff);
        }
        Ok(removed)
    }

    pub async fn start(&self) {
        loop {
            if let Err(err) = self.sweep_once().await {
                tracing::warn!("Output sweep failed: {:#}", err);
            }
            tokio::time::sleep(Duration::from_secs(self.interval_seconds)).await;
        }
    }
}
