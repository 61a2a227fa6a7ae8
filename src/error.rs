//! Error types for the production report engine.
//!
//! Every report operation returns [`ReportError`]. Errors are terminal for the
//! request that raised them: nothing is retried and no partial report is
//! produced.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{Axis, EntityId};

/// Broad classification of a [`ReportError`], used to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request repeats an axis.
    Conflict,
    /// The request is well-formed but its parameters cannot produce a report.
    BadRequest,
    /// Configuration, seed data or read store failure.
    Internal,
}

/// The main error type for report generation.
///
/// # Example
///
/// ```
/// use production_reports::error::{ErrorKind, ReportError};
///
/// let error = ReportError::EmployeeMissing { operation_id: 7 };
/// assert_eq!(
///     error.to_string(),
///     "The operation with id: 7 from the selection does not have an employee"
/// );
/// assert_eq!(error.kind(), ErrorKind::BadRequest);
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// The three axes of a deadline request are not pairwise distinct.
    #[error("Parameter values are repeated: {first}, {second}, {third}")]
    RepeatedAxes {
        /// The first axis.
        first: Axis,
        /// The second axis.
        second: Axis,
        /// The third axis.
        third: Axis,
    },

    /// A set selector was supplied without any ids.
    #[error("No ids supplied for the {position} parameter ({axis})")]
    EmptySelector {
        /// Which slot of the request is empty ("second" or "third").
        position: &'static str,
        /// The axis occupying that slot.
        axis: Axis,
    },

    /// The operation lookup returned nothing.
    #[error("The parameter values are not correct, the final result is empty")]
    EmptyResult,

    /// A requested project id does not match the project of an operation.
    #[error(
        "The project id {project_id} does not match the project id of operation {operation_id}"
    )]
    ProjectMismatch {
        /// The project id taken from the request.
        project_id: EntityId,
        /// The operation that belongs to another project.
        operation_id: EntityId,
    },

    /// An operation required to carry an employee has none assigned.
    #[error("The operation with id: {operation_id} from the selection does not have an employee")]
    EmployeeMissing {
        /// The unassigned operation.
        operation_id: EntityId,
    },

    /// A requested employee id does not match the employee of an operation.
    #[error(
        "The operation with id: {operation_id} from the selection does not match the specified employee with id: {employee_id}"
    )]
    EmployeeMismatch {
        /// The operation whose employee differs.
        operation_id: EntityId,
        /// The employee id taken from the request.
        employee_id: EntityId,
    },

    /// An entity is absent from the fetched operations.
    #[error("{entity} with id: {id} not found")]
    NotFound {
        /// The kind of entity.
        entity: Axis,
        /// The requested id.
        id: EntityId,
    },

    /// An entity is absent from the fetched operations within a scope.
    #[error("{entity} with id: {id} not found in {scope} with id: {scope_id}")]
    NotFoundIn {
        /// The kind of entity.
        entity: Axis,
        /// The requested id.
        id: EntityId,
        /// The kind of the scoping entity.
        scope: Axis,
        /// The id of the scoping entity.
        scope_id: EntityId,
    },

    /// The (first, second) axis pairing has no report handler.
    #[error("Wrong values in parameters: {first} followed by {second} is not supported")]
    UnsupportedAxes {
        /// The first axis.
        first: Axis,
        /// The second axis.
        second: Axis,
    },

    /// A report period starts after it ends.
    #[error("Start date {start} cannot be after end date {end}")]
    InvalidPeriod {
        /// The requested start of the period.
        start: NaiveDate,
        /// The requested end of the period.
        end: NaiveDate,
    },

    /// Configuration or seed file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration or seed file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Seed data references entities that do not exist or violates an invariant.
    #[error("Data integrity violation: {message}")]
    DataIntegrity {
        /// A description of the violation.
        message: String,
    },

    /// A read port failed.
    #[error("Read store error: {message}")]
    Store {
        /// A description of the failure.
        message: String,
    },
}

impl ReportError {
    /// Returns the broad class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::RepeatedAxes { .. } => ErrorKind::Conflict,
            ReportError::EmptySelector { .. }
            | ReportError::EmptyResult
            | ReportError::ProjectMismatch { .. }
            | ReportError::EmployeeMissing { .. }
            | ReportError::EmployeeMismatch { .. }
            | ReportError::NotFound { .. }
            | ReportError::NotFoundIn { .. }
            | ReportError::UnsupportedAxes { .. }
            | ReportError::InvalidPeriod { .. } => ErrorKind::BadRequest,
            ReportError::ConfigNotFound { .. }
            | ReportError::ConfigParseError { .. }
            | ReportError::DataIntegrity { .. }
            | ReportError::Store { .. } => ErrorKind::Internal,
        }
    }

    /// Returns true for lookups that found nothing, as opposed to mismatches.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ReportError::NotFound { .. } | ReportError::NotFoundIn { .. } | ReportError::EmptyResult
        )
    }
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;
