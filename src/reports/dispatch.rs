//! The second-axis rule table of the deadline report.
//!
//! A deadline report is legal for exactly six `(first, second)` axis pairings,
//! one per permutation of the three axes. Each pairing has a handler that
//! builds the second-level entries from the fetched operations. Pairings
//! missing from [`RULES`] are rejected by the engine.
//!
//! Handlers fall into two groups:
//! - Operation-first: the fetch yields a single operation, so the second and
//!   third selectors can only be checked against it.
//! - Project-first and Employee-first: the fetched operations are searched and
//!   the leaves are filtered by foreign key and third-axis membership.

use std::collections::BTreeSet;

use crate::error::{ReportError, ReportResult};
use crate::models::{Axis, DeadlineLeaf, EmployeeRef, EntityId, Operation, SecondLevelEntry};

/// Inputs shared by every second-axis handler.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'a> {
    /// Id of the first-axis entity.
    pub first_id: EntityId,
    /// Ids selected on the second axis.
    pub second_ids: &'a BTreeSet<EntityId>,
    /// Ids selected on the third axis.
    pub third_ids: &'a BTreeSet<EntityId>,
    /// Operations fetched for the request, ascending by id, never empty.
    pub operations: &'a [Operation],
}

/// Builds the second-level entries of a report.
pub type SecondAxisHandler = fn(&ResolutionContext<'_>) -> ReportResult<Vec<SecondLevelEntry>>;

/// One legal axis pairing and its handler.
#[derive(Clone, Copy)]
pub struct AxisRule {
    /// Axis of the first slot.
    pub first: Axis,
    /// Axis of the second slot.
    pub second: Axis,
    /// Axis of the third slot, implied by the other two.
    pub third: Axis,
    /// Builds the entries.
    pub handler: SecondAxisHandler,
}

/// Every legal pairing.
pub static RULES: [AxisRule; 6] = [
    AxisRule {
        first: Axis::Project,
        second: Axis::Operation,
        third: Axis::Employee,
        handler: project_by_operations,
    },
    AxisRule {
        first: Axis::Project,
        second: Axis::Employee,
        third: Axis::Operation,
        handler: project_by_employees,
    },
    AxisRule {
        first: Axis::Operation,
        second: Axis::Project,
        third: Axis::Employee,
        handler: operation_by_project,
    },
    AxisRule {
        first: Axis::Operation,
        second: Axis::Employee,
        third: Axis::Project,
        handler: operation_by_employee,
    },
    AxisRule {
        first: Axis::Employee,
        second: Axis::Project,
        third: Axis::Operation,
        handler: employee_by_projects,
    },
    AxisRule {
        first: Axis::Employee,
        second: Axis::Operation,
        third: Axis::Project,
        handler: employee_by_operations,
    },
];

/// Looks up the rule for a `(first, second)` pairing.
pub fn find_rule(first: Axis, second: Axis) -> Option<&'static AxisRule> {
    RULES
        .iter()
        .find(|rule| rule.first == first && rule.second == second)
}

fn leaf(id: EntityId, label: String, op: &Operation) -> DeadlineLeaf {
    DeadlineLeaf {
        id,
        label,
        planned_end_date: op.planned_end_date,
        real_end_date: op.real_end_date,
    }
}

fn single_operation<'a>(ctx: &ResolutionContext<'a>) -> ReportResult<&'a Operation> {
    ctx.operations.first().ok_or(ReportError::EmptyResult)
}

fn required_employee(op: &Operation) -> ReportResult<&EmployeeRef> {
    op.employee
        .as_ref()
        .ok_or(ReportError::EmployeeMissing { operation_id: op.id })
}

fn check_project(project_id: EntityId, op: &Operation) -> ReportResult<()> {
    if op.project.id != project_id {
        return Err(ReportError::ProjectMismatch {
            project_id,
            operation_id: op.id,
        });
    }
    Ok(())
}

fn check_employee(employee_id: EntityId, op: &Operation) -> ReportResult<()> {
    if !op.is_assigned_to(employee_id) {
        return Err(ReportError::EmployeeMismatch {
            operation_id: op.id,
            employee_id,
        });
    }
    Ok(())
}

/// Finds a selected operation that also belongs to the given scope.
///
/// An id absent from the fetch is `NotFound`; one fetched but outside the
/// scope is `NotFoundIn`.
fn scoped_operation<'a>(
    ctx: &ResolutionContext<'a>,
    operation_id: EntityId,
    scope: Axis,
    scope_id: EntityId,
    in_scope: impl Fn(&Operation) -> bool,
) -> ReportResult<&'a Operation> {
    let op = ctx
        .operations
        .iter()
        .find(|o| o.id == operation_id)
        .ok_or(ReportError::NotFound {
            entity: Axis::Operation,
            id: operation_id,
        })?;

    if !in_scope(op) {
        return Err(ReportError::NotFoundIn {
            entity: Axis::Operation,
            id: operation_id,
            scope,
            scope_id,
        });
    }
    Ok(op)
}

/// Project -> operations -> the employee of each operation.
fn project_by_operations(ctx: &ResolutionContext<'_>) -> ReportResult<Vec<SecondLevelEntry>> {
    let project_id = ctx.first_id;
    ctx.second_ids
        .iter()
        .map(|&operation_id| {
            let op = scoped_operation(ctx, operation_id, Axis::Project, project_id, |o| {
                o.project.id == project_id
            })?;

            let third_values = op
                .employee
                .iter()
                .filter(|e| ctx.third_ids.contains(&e.id))
                .map(|e| leaf(e.id, e.last_name.clone(), op))
                .collect();

            Ok(SecondLevelEntry {
                id: op.id,
                label: op.name.clone(),
                third_values,
            })
        })
        .collect()
}

/// Project -> employees -> the selected operations of each employee.
fn project_by_employees(ctx: &ResolutionContext<'_>) -> ReportResult<Vec<SecondLevelEntry>> {
    let project_id = ctx.first_id;
    for op in ctx.operations {
        check_project(project_id, op)?;
    }

    ctx.second_ids
        .iter()
        .map(|&employee_id| {
            let employee = ctx
                .operations
                .iter()
                .filter_map(|o| o.employee.as_ref())
                .find(|e| e.id == employee_id)
                .ok_or(ReportError::NotFoundIn {
                    entity: Axis::Employee,
                    id: employee_id,
                    scope: Axis::Project,
                    scope_id: project_id,
                })?;

            let third_values = ctx
                .operations
                .iter()
                .filter(|o| o.is_assigned_to(employee_id) && ctx.third_ids.contains(&o.id))
                .map(|o| leaf(o.id, o.name.clone(), o))
                .collect();

            Ok(SecondLevelEntry {
                id: employee.id,
                label: employee.last_name.clone(),
                third_values,
            })
        })
        .collect()
}

/// Operation -> its project -> its employee.
fn operation_by_project(ctx: &ResolutionContext<'_>) -> ReportResult<Vec<SecondLevelEntry>> {
    let op = single_operation(ctx)?;
    let employee = required_employee(op)?;
    for &project_id in ctx.second_ids {
        check_project(project_id, op)?;
    }
    for &employee_id in ctx.third_ids {
        check_employee(employee_id, op)?;
    }

    Ok(vec![SecondLevelEntry {
        id: op.project.id,
        label: op.project.number.to_string(),
        third_values: vec![leaf(employee.id, employee.last_name.clone(), op)],
    }])
}

/// Operation -> its employee -> its project.
fn operation_by_employee(ctx: &ResolutionContext<'_>) -> ReportResult<Vec<SecondLevelEntry>> {
    let op = single_operation(ctx)?;
    let employee = required_employee(op)?;
    for &employee_id in ctx.second_ids {
        check_employee(employee_id, op)?;
    }
    for &project_id in ctx.third_ids {
        check_project(project_id, op)?;
    }

    Ok(vec![SecondLevelEntry {
        id: employee.id,
        label: employee.last_name.clone(),
        third_values: vec![leaf(op.project.id, op.project.number.to_string(), op)],
    }])
}

/// Employee -> projects -> the employee's operations in each project.
fn employee_by_projects(ctx: &ResolutionContext<'_>) -> ReportResult<Vec<SecondLevelEntry>> {
    let employee_id = ctx.first_id;
    ctx.second_ids
        .iter()
        .map(|&project_id| {
            let mut owned = ctx
                .operations
                .iter()
                .filter(|o| o.project.id == project_id && o.is_assigned_to(employee_id))
                .peekable();

            let project = owned.peek().map(|o| o.project).ok_or(ReportError::NotFoundIn {
                entity: Axis::Project,
                id: project_id,
                scope: Axis::Employee,
                scope_id: employee_id,
            })?;

            let third_values = owned
                .filter(|o| ctx.third_ids.contains(&o.id))
                .map(|o| leaf(o.id, o.name.clone(), o))
                .collect();

            Ok(SecondLevelEntry {
                id: project.id,
                label: project.number.to_string(),
                third_values,
            })
        })
        .collect()
}

/// Employee -> operations -> the project of each operation.
fn employee_by_operations(ctx: &ResolutionContext<'_>) -> ReportResult<Vec<SecondLevelEntry>> {
    let employee_id = ctx.first_id;
    ctx.second_ids
        .iter()
        .map(|&operation_id| {
            let op = scoped_operation(ctx, operation_id, Axis::Employee, employee_id, |o| {
                o.is_assigned_to(employee_id)
            })?;

            let third_values = if ctx.third_ids.contains(&op.project.id) {
                vec![leaf(op.project.id, op.project.number.to_string(), op)]
            } else {
                Vec::new()
            };

            Ok(SecondLevelEntry {
                id: op.id,
                label: op.name.clone(),
                third_values,
            })
        })
        .collect()
}
