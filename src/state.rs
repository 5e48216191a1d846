use crate::dataset::Dataset;
use std::sync::Arc;

/// Shared request state. The dataset is immutable after load, so handlers
/// share it read-only without locking.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub site_url: String,
}

impl AppState {
    pub fn new(dataset: Dataset, site_url: impl Into<String>) -> Self {
        let site_url = site_url.into();
        Self {
            dataset: Arc::new(dataset),
            site_url: site_url.trim_end_matches('/').to_string(),
        }
    }
}
