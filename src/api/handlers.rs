//! HTTP request handlers for the report API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ReportResult;
use crate::models::DeadlineRequest;

use super::request::{ProjectReportRequest, WorkingShiftReportRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/reports/deadlines", post(deadlines_handler))
        .route("/reports/working-shifts", post(working_shifts_handler))
        .route("/reports/projects", post(projects_handler))
        .with_state(state)
}

/// Handler for POST /reports/deadlines.
async fn deadlines_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeadlineRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing deadline report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    respond(correlation_id, state.reports().report_deadlines(&request))
}

/// Handler for POST /reports/working-shifts.
async fn working_shifts_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkingShiftReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing working shift report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    respond(
        correlation_id,
        state.reports().report_working_shifts(
            request.start_period,
            request.end_period,
            request.employee_ids.as_ref(),
        ),
    )
}

/// Handler for POST /reports/projects.
async fn projects_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProjectReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing project report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    respond(
        correlation_id,
        state
            .reports()
            .report_projects_for_period(request.start_period, request.end_period),
    )
}

/// Turns a report result into a JSON response.
fn respond<T: Serialize>(correlation_id: Uuid, result: ReportResult<T>) -> Response {
    match result {
        Ok(report) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(report),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Report request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Maps a body extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Missing fields and unknown axis names both land here.
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}
