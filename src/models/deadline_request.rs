//! The deadline report request.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Axis, EntityId};

/// Which entity types to cross-reference, and which ids to select on each axis.
///
/// The first axis is resolved to a single entity; the second and third axes
/// each carry a set of ids. Sets are ordered so reports come out in ascending
/// id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineRequest {
    /// Axis of the single top-level entity.
    pub first_parameter: Axis,
    /// Axis of the second-level entries.
    pub second_parameter: Axis,
    /// Axis of the leaves.
    pub third_parameter: Axis,
    /// Id of the top-level entity.
    pub value_of_first_parameter: EntityId,
    /// Ids selected on the second axis.
    pub values_of_second_parameter: BTreeSet<EntityId>,
    /// Ids selected on the third axis.
    pub values_of_third_parameter: BTreeSet<EntityId>,
}

impl DeadlineRequest {
    /// Returns the ids of the operations this request is about.
    ///
    /// Whichever slot the `Operation` axis occupies supplies them. When no
    /// slot does, the set is empty.
    ///
    /// ```
    /// use production_reports::models::{Axis, DeadlineRequest};
    ///
    /// let request = DeadlineRequest {
    ///     first_parameter: Axis::Project,
    ///     second_parameter: Axis::Operation,
    ///     third_parameter: Axis::Employee,
    ///     value_of_first_parameter: 1,
    ///     values_of_second_parameter: [3, 4].into_iter().collect(),
    ///     values_of_third_parameter: [8].into_iter().collect(),
    /// };
    /// assert_eq!(request.operation_ids().into_iter().collect::<Vec<_>>(), vec![3, 4]);
    /// ```
    pub fn operation_ids(&self) -> BTreeSet<EntityId> {
        if self.first_parameter == Axis::Operation {
            BTreeSet::from([self.value_of_first_parameter])
        } else if self.second_parameter == Axis::Operation {
            self.values_of_second_parameter.clone()
        } else if self.third_parameter == Axis::Operation {
            self.values_of_third_parameter.clone()
        } else {
            BTreeSet::new()
        }
    }
}
