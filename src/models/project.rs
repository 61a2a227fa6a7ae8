//! Project model.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::operation::{Operation, ProjectRef};
use super::EntityId;

/// A registered project and its ordered operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for the project.
    pub id: EntityId,
    /// The business number shown to people (e.g. 345).
    pub number: u32,
    /// What is being produced.
    pub name: String,
    /// Who ordered it.
    pub customer: String,
    /// Free-form comment.
    #[serde(default)]
    pub comment: Option<String>,
    /// When the project was registered; period reports filter on this.
    pub registered_at: NaiveDateTime,
    /// When the project is planned to be finished.
    pub planned_end_date: NaiveDate,
    /// When the project was actually finished.
    #[serde(default)]
    pub real_end_date: Option<NaiveDate>,
    /// Operations in ascending priority.
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl Project {
    /// Returns the reference operations use to point at this project.
    pub fn reference(&self) -> ProjectRef {
        ProjectRef {
            id: self.id,
            number: self.number,
        }
    }

    /// Returns true once a real end date has been recorded.
    pub fn is_ended(&self) -> bool {
        self.real_end_date.is_some()
    }

    /// Returns the number of operations that have been finished.
    pub fn ended_operations(&self) -> usize {
        self.operations.iter().filter(|o| o.is_ended()).count()
    }

    /// Returns the first unfinished operation in priority order.
    pub fn current_operation(&self) -> Option<&Operation> {
        self.operations
            .iter()
            .filter(|o| !o.is_ended())
            .min_by_key(|o| o.priority)
    }

    /// Checks whether the registration date falls within `start..=end`.
    pub fn registered_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        let date = self.registered_at.date();
        date >= start && date <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn op(id: EntityId, priority: u32, real_end_date: Option<&str>) -> Operation {
        Operation {
            id,
            name: format!("op_{}", id),
            priority,
            project: ProjectRef { id: 1, number: 345 },
            employee: None,
            planned_end_date: make_date("2023-05-20"),
            real_end_date: real_end_date.map(make_date),
        }
    }

    fn project(operations: Vec<Operation>) -> Project {
        Project {
            id: 1,
            number: 345,
            name: "Wardrobe".to_string(),
            customer: "Shishkina M.M.".to_string(),
            comment: None,
            registered_at: NaiveDateTime::parse_from_str(
                "2023-05-10 11:22:33",
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
            planned_end_date: make_date("2023-06-10"),
            real_end_date: None,
            operations,
        }
    }

    #[test]
    fn test_registered_within_is_inclusive() {
        let p = project(vec![]);
        assert!(p.registered_within(make_date("2023-05-10"), make_date("2023-05-10")));
        assert!(p.registered_within(make_date("2023-05-01"), make_date("2023-05-31")));
        assert!(!p.registered_within(make_date("2023-05-11"), make_date("2023-05-31")));
        assert!(!p.registered_within(make_date("2023-04-01"), make_date("2023-05-09")));
    }

    #[test]
    fn test_current_operation_is_lowest_unfinished_priority() {
        let p = project(vec![
            op(1, 1, Some("2023-05-11")),
            op(3, 4, None),
            op(2, 2, None),
        ]);
        assert_eq!(p.current_operation().map(|o| o.id), Some(2));
        assert_eq!(p.ended_operations(), 1);
    }

    #[test]
    fn test_current_operation_none_when_all_finished() {
        let p = project(vec![op(1, 1, Some("2023-05-11"))]);
        assert!(p.current_operation().is_none());
    }
}
