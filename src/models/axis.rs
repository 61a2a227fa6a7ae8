//! Report axes.
//!
//! A deadline report cross-references three entity types. Each of the three
//! slots of a request (first, second, third) is occupied by one [`Axis`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three selectable report dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// A registered project, identified by id and labelled by its business number.
    Project,
    /// A unit of work inside a project, labelled by its name.
    Operation,
    /// A worker, labelled by last name.
    Employee,
}

impl Axis {
    /// All axes, in declaration order.
    pub const ALL: [Axis; 3] = [Axis::Project, Axis::Operation, Axis::Employee];

    /// Returns the axis that completes `first` and `second` into a full triple.
    ///
    /// Returns `None` when `first` and `second` are the same axis.
    ///
    /// ```
    /// use production_reports::models::Axis;
    ///
    /// assert_eq!(Axis::remaining(Axis::Project, Axis::Operation), Some(Axis::Employee));
    /// assert_eq!(Axis::remaining(Axis::Employee, Axis::Employee), None);
    /// ```
    pub fn remaining(first: Axis, second: Axis) -> Option<Axis> {
        if first == second {
            return None;
        }
        Axis::ALL
            .into_iter()
            .find(|axis| *axis != first && *axis != second)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Project => "Project",
            Axis::Operation => "Operation",
            Axis::Employee => "Employee",
        };
        f.write_str(name)
    }
}
