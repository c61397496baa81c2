use std::sync::Arc;

use crate::maps::DirectionsProvider;
use crate::observability::metrics::Metrics;

pub struct AppState {
    pub directions: Arc<dyn DirectionsProvider>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(directions: Arc<dyn DirectionsProvider>) -> Self {
        Self {
            directions,
            metrics: Metrics::new(),
        }
    }
}
