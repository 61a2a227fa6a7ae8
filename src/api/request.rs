//! Request types for the report API.
//!
//! The deadline endpoint takes a [`DeadlineRequest`](crate::models::DeadlineRequest)
//! body directly; the period reports use the types below.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::EntityId;

/// Request body for the `/reports/working-shifts` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingShiftReportRequest {
    /// First day of the period (inclusive).
    pub start_period: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_period: NaiveDate,
    /// Restricts the report to these employees when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_ids: Option<BTreeSet<EntityId>>,
}

/// Request body for the `/reports/projects` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectReportRequest {
    /// First day of the period (inclusive).
    pub start_period: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_period: NaiveDate,
}
