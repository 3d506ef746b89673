//! Read-only aggregations over a plan.
//!
//! All functions here are pure: they take a plan by reference and never
//! mutate it.

use serde::{Deserialize, Serialize};

use crate::models::{Plan, ScheduleItem};

/// Number of items currently in the plan.
pub fn count_activities<A: ScheduleItem>(plan: &Plan<A>) -> usize {
    plan.len()
}

/// Sum of all item lengths in minutes.
pub fn total_duration_minutes<A: ScheduleItem>(plan: &Plan<A>) -> f64 {
    plan.activities()
        .iter()
        .map(|item| item.duration().as_secs_f64() / 60.0)
        .sum()
}

/// Mean item length in minutes, or `0.0` for an empty plan.
pub fn average_duration_minutes<A: ScheduleItem>(plan: &Plan<A>) -> f64 {
    if plan.is_empty() {
        return 0.0;
    }
    total_duration_minutes(plan) / plan.len() as f64
}

/// Snapshot of the statistics shown for a single plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStatistics {
    /// Title of the plan the figures belong to
    pub title: String,
    /// Number of activities
    pub activity_count: usize,
    /// Mean activity length in minutes
    pub average_duration_minutes: f64,
    /// Combined activity length in minutes
    pub total_duration_minutes: f64,
}

impl PlanStatistics {
    /// Computes all figures for `plan`.
    pub fn from_plan<A: ScheduleItem>(plan: &Plan<A>) -> Self {
        Self {
            title: plan.title().to_string(),
            activity_count: count_activities(plan),
            average_duration_minutes: average_duration_minutes(plan),
            total_duration_minutes: total_duration_minutes(plan),
        }
    }
}
