//! Parameter structures for planner operations.
//!
//! These structures are shared by every interface that drives the
//! [`crate::Planner`] and carry no framework-specific derives. Interface
//! layers define their own argument types (for example clap `Args` in the
//! CLI) and convert them into these with `From` implementations:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! Plans are referred to by their 1-based number in creation order, the same
//! number shown in plan listings.

use std::path::PathBuf;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result},
    models::Activity,
};

/// Refers to a plan by its 1-based number.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlanRef {
    /// 1-based number of the plan
    pub number: usize,
}

impl PlanRef {
    /// Converts the 1-based number into a store position.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` for number 0.
    pub fn position(&self) -> Result<usize> {
        self.number
            .checked_sub(1)
            .ok_or(PlannerError::PlanNotFound { number: 0 })
    }
}

/// Parameters for creating a new plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    /// Title of the plan (may be empty)
    pub title: String,
}

/// Parameters for adding an activity to a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddActivity {
    /// 1-based number of the target plan
    pub plan: usize,
    /// Label of the activity
    pub name: String,
    /// Optional free-form description
    #[serde(default)]
    pub description: String,
    /// When the activity begins
    pub start_time: Timestamp,
    /// When the activity ends
    pub end_time: Timestamp,
}

impl AddActivity {
    /// Validates the input and builds the activity to insert.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when the start time is not
    /// before the end time.
    pub fn validate(&self) -> Result<Activity> {
        if self.start_time >= self.end_time {
            return Err(PlannerError::invalid_input("end_time")
                .with_reason("Start time must be before end time"));
        }

        Ok(Activity::new(
            self.name.clone(),
            self.description.clone(),
            self.start_time,
            self.end_time,
        ))
    }
}

/// Parameters for removing an activity from a plan.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RemoveActivity {
    /// 1-based number of the plan
    pub plan: usize,
    /// 1-based index of the activity within the plan
    pub index: u32,
}

/// Parameters naming a plan file for export or import.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanFile {
    /// Location of the file
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(second: i64) -> Timestamp {
        Timestamp::from_second(second).unwrap()
    }

    fn add(start: i64, end: i64) -> AddActivity {
        AddActivity {
            plan: 1,
            name: "Gym".to_string(),
            description: "Leg day".to_string(),
            start_time: at(start),
            end_time: at(end),
        }
    }

    #[test]
    fn test_plan_ref_position() {
        assert_eq!(PlanRef { number: 1 }.position().unwrap(), 0);
        assert_eq!(PlanRef { number: 4 }.position().unwrap(), 3);
        assert!(matches!(
            PlanRef { number: 0 }.position(),
            Err(PlannerError::PlanNotFound { number: 0 })
        ));
    }

    #[test]
    fn test_add_activity_validate_ok() {
        let activity = add(1_700_000_000, 1_700_003_600).validate().unwrap();
        assert_eq!(activity.name, "Gym");
        assert_eq!(activity.description, "Leg day");
        assert_eq!(activity.index(), 0);
    }

    #[test]
    fn test_add_activity_rejects_inverted_or_empty_range() {
        for (start, end) in [(1_700_003_600, 1_700_000_000), (1_700_000_000, 1_700_000_000)] {
            match add(start, end).validate() {
                Err(PlannerError::InvalidInput { field, reason }) => {
                    assert_eq!(field, "end_time");
                    assert!(reason.contains("before"));
                }
                other => panic!("expected invalid input, got {other:?}"),
            }
        }
    }
}
