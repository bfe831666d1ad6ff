//! Dashboard statistics service.

use std::sync::Arc;

use renthub_core::error::AppError;
use renthub_database::repositories::stats::{DashboardStats, StatsRepository};

/// Serves the public dashboard counters.
#[derive(Debug, Clone)]
pub struct StatsService {
    /// Stats repository.
    stats_repo: Arc<StatsRepository>,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(stats_repo: Arc<StatsRepository>) -> Self {
        Self { stats_repo }
    }

    /// Collects the dashboard counters.
    pub async fn dashboard(&self) -> Result<DashboardStats, AppError> {
        self.stats_repo.dashboard().await
    }
}
