//! Plan summary types and functionality.

use serde::{Deserialize, Serialize};

use super::Plan;
use crate::stats;

/// Summary information about a plan for list views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    /// 1-based number of the plan within the store
    pub number: usize,
    /// Title of the plan
    pub title: String,
    /// Number of activities in the plan
    pub activity_count: usize,
    /// Mean activity length in minutes
    pub average_duration_minutes: f64,
}

impl PlanSummary {
    /// Create a PlanSummary from a plan and its 1-based number.
    pub fn from_plan(number: usize, plan: &Plan) -> Self {
        Self {
            number,
            title: plan.title().to_string(),
            activity_count: stats::count_activities(plan),
            average_duration_minutes: stats::average_duration_minutes(plan),
        }
    }
}

/// A full plan together with its 1-based number in the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanDetails {
    /// 1-based number of the plan within the store
    pub number: usize,
    /// The plan with all of its activities
    pub plan: Plan,
}
