//! Application state for the report API.

use std::sync::Arc;

use crate::reports::ReportService;

/// Shared application state.
///
/// Holds the report service every handler delegates to.
#[derive(Clone)]
pub struct AppState {
    reports: Arc<ReportService>,
}

impl AppState {
    /// Creates a new application state around the given service.
    pub fn new(reports: ReportService) -> Self {
        Self {
            reports: Arc::new(reports),
        }
    }

    /// Returns the report service.
    pub fn reports(&self) -> &ReportService {
        &self.reports
    }
}
