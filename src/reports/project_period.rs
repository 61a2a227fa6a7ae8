//! Project overview over a registration period.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::error::ReportResult;
use crate::models::{Project, ProjectPeriodReport, ProjectReportRow};
use crate::ports::ProjectReader;

use super::validator::validate_period;

/// Summarizes one project into a report row.
pub fn project_row(project: &Project) -> ProjectReportRow {
    ProjectReportRow {
        project_id: project.id,
        number: project.number,
        name: project.name.clone(),
        customer: project.customer.clone(),
        registered_at: project.registered_at,
        planned_end_date: project.planned_end_date,
        real_end_date: project.real_end_date,
        is_ended: project.is_ended(),
        operations_total: project.operations.len(),
        operations_ended: project.ended_operations(),
        current_operation: project.current_operation().map(|o| o.name.clone()),
    }
}

/// Builds the report of projects registered within `start..=end`.
///
/// Rows are ordered by registration time, then by project number.
pub fn build_project_period_report(
    start: NaiveDate,
    end: NaiveDate,
    generated_at: DateTime<Utc>,
    projects: &dyn ProjectReader,
) -> ReportResult<ProjectPeriodReport> {
    validate_period(start, end)?;

    let mut found = projects.projects_in_range(start, end)?;
    found.sort_by_key(|p| (p.registered_at, p.number));
    debug!(projects = found.len(), "Projects fetched for period report");

    Ok(ProjectPeriodReport {
        start_period: start,
        end_period: end,
        generated_at,
        projects: found.iter().map(project_row).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;
    use crate::models::{EntityId, Operation};
    use chrono::{NaiveDateTime, TimeZone};

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(datetime_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn op(id: EntityId, project: &Project, name: &str, priority: u32, ended: bool) -> Operation {
        Operation {
            id,
            name: name.to_string(),
            priority,
            project: project.reference(),
            employee: None,
            planned_end_date: make_date("2024-03-01"),
            real_end_date: ended.then(|| make_date("2024-02-20")),
        }
    }

    fn project(id: EntityId, number: u32, registered_at: &str) -> Project {
        Project {
            id,
            number,
            name: format!("Project {}", number),
            customer: "Acme".to_string(),
            comment: None,
            registered_at: make_datetime(registered_at),
            planned_end_date: make_date("2024-03-01"),
            real_end_date: None,
            operations: Vec::new(),
        }
    }

    struct Projects(Vec<Project>);

    impl ProjectReader for Projects {
        fn projects_in_range(
            &self,
            start: NaiveDate,
            end: NaiveDate,
        ) -> ReportResult<Vec<Project>> {
            Ok(self
                .0
                .iter()
                .filter(|p| p.registered_within(start, end))
                .cloned()
                .collect())
        }
    }

    fn fixture() -> Projects {
        let mut wardrobe = project(1, 345, "2024-02-10 09:00:00");
        wardrobe.operations = vec![
            op(1, &wardrobe, "Cutting", 1, true),
            op(2, &wardrobe, "Edging", 2, false),
            op(3, &wardrobe, "Assembly", 3, false),
        ];
        let door = project(2, 346, "2024-02-03 12:00:00");
        let table = project(3, 284, "2024-02-10 09:00:00");
        let late = project(4, 400, "2024-03-15 09:00:00");
        Projects(vec![wardrobe, door, table, late])
    }

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_row_summarizes_operations() {
        let fx = fixture();
        let row = project_row(&fx.0[0]);
        assert_eq!(row.number, 345);
        assert_eq!(row.operations_total, 3);
        assert_eq!(row.operations_ended, 1);
        assert_eq!(row.current_operation.as_deref(), Some("Edging"));
        assert!(!row.is_ended);
    }

    #[test]
    fn test_row_without_operations() {
        let fx = fixture();
        let row = project_row(&fx.0[1]);
        assert_eq!(row.operations_total, 0);
        assert_eq!(row.current_operation, None);
    }

    #[test]
    fn test_rows_ordered_by_registration_then_number() {
        let fx = fixture();
        let report = build_project_period_report(
            make_date("2024-02-01"),
            make_date("2024-02-29"),
            generated_at(),
            &fx,
        )
        .unwrap();

        let numbers: Vec<u32> = report.projects.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![346, 284, 345]);
        assert_eq!(report.generated_at, generated_at());
        assert_eq!(report.start_period, make_date("2024-02-01"));
    }

    #[test]
    fn test_period_bounds_are_inclusive() {
        let fx = fixture();
        let day = make_date("2024-03-15");
        let report = build_project_period_report(day, day, generated_at(), &fx).unwrap();
        assert_eq!(report.projects.len(), 1);
        assert_eq!(report.projects[0].number, 400);
    }

    #[test]
    fn test_inverted_period_is_rejected() {
        let fx = fixture();
        let result = build_project_period_report(
            make_date("2024-03-01"),
            make_date("2024-02-01"),
            generated_at(),
            &fx,
        );
        assert!(matches!(result, Err(ReportError::InvalidPeriod { .. })));
    }
}
