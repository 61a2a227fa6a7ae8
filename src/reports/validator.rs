//! Request validation.
//!
//! Checks that run before any read port is touched.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::error::{ReportError, ReportResult};
use crate::models::DeadlineRequest;

/// Validates a deadline request.
///
/// # Errors
///
/// - `RepeatedAxes` if the three axes are not pairwise distinct.
/// - `EmptySelector` if the second or third id set is empty.
pub fn validate_request(request: &DeadlineRequest) -> ReportResult<()> {
    let axes: HashSet<_> = [
        request.first_parameter,
        request.second_parameter,
        request.third_parameter,
    ]
    .into_iter()
    .collect();

    if axes.len() != 3 {
        return Err(ReportError::RepeatedAxes {
            first: request.first_parameter,
            second: request.second_parameter,
            third: request.third_parameter,
        });
    }

    if request.values_of_second_parameter.is_empty() {
        return Err(ReportError::EmptySelector {
            position: "second",
            axis: request.second_parameter,
        });
    }

    if request.values_of_third_parameter.is_empty() {
        return Err(ReportError::EmptySelector {
            position: "third",
            axis: request.third_parameter,
        });
    }

    Ok(())
}

/// Validates a report period; both bounds are inclusive.
pub fn validate_period(start: NaiveDate, end: NaiveDate) -> ReportResult<()> {
    if start > end {
        return Err(ReportError::InvalidPeriod { start, end });
    }
    Ok(())
}
