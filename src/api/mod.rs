//! HTTP API for the production report engine.
//!
//! Exposes each report as a JSON `POST` endpoint under `/reports`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ProjectReportRequest, WorkingShiftReportRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
