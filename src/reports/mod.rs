//! Report generation.
//!
//! Three reports are built here:
//! - the deadline cross-reference, which nests project, operation and employee
//!   axes in a caller-chosen order ([`resolve_deadlines`])
//! - the working shift report, which totals shift participation per employee
//!   over a period ([`build_working_shift_report`])
//! - the project overview for projects registered in a period
//!   ([`build_project_period_report`])
//!
//! [`ReportService`] wires these over a set of read ports.

mod deadline;
mod dispatch;
mod project_period;
mod service;
mod validator;
mod working_shift;

pub use deadline::resolve_deadlines;
pub use dispatch::{find_rule, AxisRule, ResolutionContext, SecondAxisHandler, RULES};
pub use project_period::{build_project_period_report, project_row};
pub use service::ReportService;
pub use validator::{validate_period, validate_request};
pub use working_shift::{build_working_shift_report, distinct_employee_ids, total_parts_by_employee};
