//! Performance benchmarks for the report engine.
//!
//! Covers the deadline resolution for every axis ordering, shift aggregation
//! at growing sizes, and a full HTTP round trip.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::BTreeSet;
use std::sync::Arc;

use axum::{body::Body, http::Request};
use chrono::{Days, NaiveDate, NaiveDateTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tower::ServiceExt;

use production_reports::api::{create_router, AppState};
use production_reports::models::{
    Axis, DeadlineRequest, Employee, EmployeeRef, EntityId, Operation, Project, ShiftRecord,
};
use production_reports::ports::ReadPorts;
use production_reports::reports::{resolve_deadlines, total_parts_by_employee, ReportService};
use production_reports::store::InMemoryStore;

const EMPLOYEES: EntityId = 50;
const OPERATIONS_PER_PROJECT: EntityId = 10;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date")
}

fn registered_at(day: u64) -> NaiveDateTime {
    (base_date() + Days::new(day))
        .and_hms_opt(9, 0, 0)
        .expect("valid time")
}

fn employee(id: EntityId) -> Employee {
    Employee {
        id,
        first_name: format!("First{}", id),
        middle_name: None,
        last_name: format!("Last{}", id),
        phone: None,
        registered_at: registered_at(0),
    }
}

/// Builds a store with `projects` projects of ten operations each and a
/// year of shifts where every employee works every day.
fn create_store(projects: EntityId) -> InMemoryStore {
    let employees: Vec<Employee> = (1..=EMPLOYEES).map(employee).collect();

    let projects: Vec<Project> = (1..=projects)
        .map(|id| {
            let mut project = Project {
                id,
                number: 100 + id as u32,
                name: format!("Project {}", id),
                customer: "Bench".to_string(),
                comment: None,
                registered_at: registered_at(id as u64 % 365),
                planned_end_date: base_date() + Days::new(400),
                real_end_date: None,
                operations: Vec::new(),
            };
            project.operations = (0..OPERATIONS_PER_PROJECT)
                .map(|i| {
                    let op_id = (id - 1) * OPERATIONS_PER_PROJECT + i + 1;
                    let emp = &employees[(op_id % EMPLOYEES) as usize];
                    Operation {
                        id: op_id,
                        name: format!("Operation {}", op_id),
                        priority: i as u32 + 1,
                        project: project.reference(),
                        employee: Some(EmployeeRef {
                            id: emp.id,
                            first_name: emp.first_name.clone(),
                            last_name: emp.last_name.clone(),
                        }),
                        planned_end_date: base_date() + Days::new(30 + i as u64),
                        real_end_date: None,
                    }
                })
                .collect();
            project
        })
        .collect();

    let shifts: Vec<ShiftRecord> = (0..365_u64)
        .flat_map(|day| {
            (1..=EMPLOYEES).map(move |employee_id| ShiftRecord {
                working_shift_id: day as EntityId + 1,
                shift_date: base_date() + Days::new(day),
                employee_id,
                part_of_shift: if employee_id % 2 == 0 { 0.5 } else { 1.0 },
            })
        })
        .collect();

    InMemoryStore::new(employees, projects, shifts).expect("Failed to build store")
}

fn create_service(store: InMemoryStore) -> ReportService {
    ReportService::new(ReadPorts::from_store(Arc::new(store)))
}

fn request(
    axes: (Axis, Axis, Axis),
    first: EntityId,
    second: &[EntityId],
    third: &[EntityId],
) -> DeadlineRequest {
    DeadlineRequest {
        first_parameter: axes.0,
        second_parameter: axes.1,
        third_parameter: axes.2,
        value_of_first_parameter: first,
        values_of_second_parameter: second.iter().copied().collect(),
        values_of_third_parameter: third.iter().copied().collect(),
    }
}

fn bench_deadline_orderings(c: &mut Criterion) {
    let store = create_store(100);
    let project_ops: Vec<EntityId> = (1..=OPERATIONS_PER_PROJECT).collect();
    let employees: Vec<EntityId> = (1..=EMPLOYEES).collect();
    let projects: Vec<EntityId> = (1..=100).collect();
    // Operation n is assigned to employee n % 50 + 1.
    let employee_ops: Vec<EntityId> = (1..=20).map(|i| i * EMPLOYEES).collect();
    let owning_projects: BTreeSet<EntityId> = employee_ops
        .iter()
        .map(|id| (id - 1) / OPERATIONS_PER_PROJECT + 1)
        .collect();
    let owning_projects: Vec<EntityId> = owning_projects.into_iter().collect();

    let cases = [
        (
            "project_operation_employee",
            request((Axis::Project, Axis::Operation, Axis::Employee), 1, &project_ops, &employees),
        ),
        (
            "project_employee_operation",
            request((Axis::Project, Axis::Employee, Axis::Operation), 1, &project_ops[1..], &project_ops),
        ),
        (
            "operation_project_employee",
            request((Axis::Operation, Axis::Project, Axis::Employee), 2, &[1], &[3]),
        ),
        (
            "operation_employee_project",
            request((Axis::Operation, Axis::Employee, Axis::Project), 2, &[3], &[1]),
        ),
        (
            "employee_project_operation",
            request((Axis::Employee, Axis::Project, Axis::Operation), 1, &owning_projects, &employee_ops),
        ),
        (
            "employee_operation_project",
            request((Axis::Employee, Axis::Operation, Axis::Project), 1, &employee_ops, &projects),
        ),
    ];

    let mut group = c.benchmark_group("deadline_orderings");
    for (name, req) in &cases {
        group.bench_function(*name, |b| {
            b.iter(|| resolve_deadlines(black_box(req), &store).expect("report"))
        });
    }
    group.finish();
}

fn bench_shift_totals(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift_totals");
    for days in [7_u64, 31, 365] {
        let records: Vec<ShiftRecord> = (0..days)
            .flat_map(|day| {
                (1..=EMPLOYEES).map(move |employee_id| ShiftRecord {
                    working_shift_id: day as EntityId + 1,
                    shift_date: base_date() + Days::new(day),
                    employee_id,
                    part_of_shift: 0.5,
                })
            })
            .collect();
        group.throughput(Throughput::Elements(records.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &records, |b, records| {
            b.iter(|| total_parts_by_employee(black_box(records)))
        });
    }
    group.finish();
}

fn bench_period_reports(c: &mut Criterion) {
    let service = create_service(create_store(100));
    let start = base_date();
    let end = base_date() + Days::new(30);

    c.bench_function("working_shift_report_month", |b| {
        b.iter(|| {
            service
                .report_working_shifts(black_box(start), black_box(end), None)
                .expect("report")
        })
    });

    c.bench_function("project_report_year", |b| {
        b.iter(|| {
            service
                .report_projects_for_period(black_box(start), black_box(base_date() + Days::new(364)))
                .expect("report")
        })
    });
}

fn bench_http_deadline(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("runtime");
    let router = create_router(AppState::new(create_service(create_store(100))));
    let body = serde_json::json!({
        "first_parameter": "project",
        "second_parameter": "operation",
        "third_parameter": "employee",
        "value_of_first_parameter": 1,
        "values_of_second_parameter": [1, 2, 3, 4, 5],
        "values_of_third_parameter": [1, 2, 3, 4, 5]
    })
    .to_string();

    c.bench_function("http_deadline_report", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/reports/deadlines")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .expect("request"),
                )
                .await
                .expect("response");
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_deadline_orderings,
    bench_shift_totals,
    bench_period_reports,
    bench_http_deadline
);
criterion_main!(benches);
