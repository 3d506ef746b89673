//! Activity model definition and related functionality.

use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

use super::ScheduleItem;

/// Name given to the activity every new plan starts with.
pub const DEFAULT_ACTIVITY_NAME: &str = "Default Activity";

/// Description given to the activity every new plan starts with.
pub const DEFAULT_ACTIVITY_DESCRIPTION: &str = "Default Description";

/// Represents a single scheduled activity within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    /// Position of the activity within its plan (1-based)
    pub(crate) index: u32,

    /// Short label of the activity
    pub name: String,

    /// Free-form description, may be empty
    #[serde(default)]
    pub description: String,

    /// When the activity begins (UTC)
    pub start_time: Timestamp,

    /// When the activity ends (UTC)
    pub end_time: Timestamp,
}

impl Activity {
    /// Creates an activity that has not been placed in a plan yet.
    ///
    /// The index stays 0 until a plan assigns one. The range is not checked
    /// here; callers are expected to pass `start_time < end_time`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start_time: Timestamp,
        end_time: Timestamp,
    ) -> Self {
        Self {
            index: 0,
            name: name.into(),
            description: description.into(),
            start_time,
            end_time,
        }
    }

    /// The placeholder activity inserted into every freshly created plan,
    /// running for one hour from `now`.
    pub fn default_at(now: Timestamp) -> Self {
        let end_time = now
            .checked_add(SignedDuration::from_hours(1))
            .unwrap_or(Timestamp::MAX);
        Self::new(
            DEFAULT_ACTIVITY_NAME,
            DEFAULT_ACTIVITY_DESCRIPTION,
            now,
            end_time,
        )
    }

    /// Position of the activity within its plan (1-based, 0 if unplaced).
    pub fn index(&self) -> u32 {
        self.index
    }
}

impl ScheduleItem for Activity {
    fn index(&self) -> u32 {
        self.index
    }

    fn set_index(&mut self, index: u32) {
        self.index = index;
    }

    fn start_time(&self) -> Timestamp {
        self.start_time
    }

    fn end_time(&self) -> Timestamp {
        self.end_time
    }
}
