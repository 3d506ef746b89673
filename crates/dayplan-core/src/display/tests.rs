use jiff::Timestamp;

use super::*;
use crate::{
    models::{Activity, Plan, PlanDetails, PlanSummary},
    stats::PlanStatistics,
};

fn at(second: i64) -> Timestamp {
    Timestamp::from_second(second).unwrap()
}

fn monday() -> PlanDetails {
    let mut plan = Plan::new("Monday");
    plan.push(Activity::new("Gym", "Leg day", at(1_700_035_200), at(1_700_038_800)));
    plan.push(Activity::new("Lunch", "", at(1_700_046_000), at(1_700_049_600)));
    PlanDetails { number: 3, plan }
}

#[test]
fn test_plan_details_display() {
    let output = format!("{}", monday());

    assert!(output.starts_with("# 3. Monday"));
    assert!(output.contains("## Activities"));
    assert!(output.contains("### 1. Gym"));
    assert!(output.contains("### 2. Lunch"));
    assert!(output.contains("Leg day"));
    assert!(output.contains("- Time: "));
}

#[test]
fn test_empty_plan_display() {
    let details = PlanDetails {
        number: 1,
        plan: Plan::new("Blank"),
    };
    let output = format!("{details}");
    assert!(output.contains("# 1. Blank"));
    assert!(output.contains("No activities in this plan."));
}

#[test]
fn test_time_range_shares_date_on_same_day() {
    let start = at(1_700_035_200);
    let end = at(1_700_035_200 + 1_800);
    let output = format!("{}", LocalTimeRange { start: &start, end: &end });

    let (from, to) = output.split_once(" to ").unwrap();
    assert!(from.starts_with("2023-11-"));
    assert!(!to.contains("2023"));
}

#[test]
fn test_plan_summaries_display() {
    let empty = PlanSummaries::default();
    assert_eq!(format!("{empty}"), "No plans found.\n");

    let summaries = PlanSummaries(vec![
        PlanSummary {
            number: 1,
            title: "Solo".to_string(),
            activity_count: 1,
            average_duration_minutes: 60.0,
        },
        PlanSummary {
            number: 2,
            title: "Busy".to_string(),
            activity_count: 4,
            average_duration_minutes: 15.0,
        },
    ]);
    let output = format!("{summaries}");
    assert!(output.contains("# Plans"));
    assert!(output.contains("- **1. Solo** (1 activity, average 60.00 minutes)"));
    assert!(output.contains("- **2. Busy** (4 activities, average 15.00 minutes)"));
}

#[test]
fn test_statistics_display() {
    let stats = PlanStatistics {
        title: "Focus".to_string(),
        activity_count: 1,
        average_duration_minutes: 90.0,
        total_duration_minutes: 90.0,
    };
    let output = format!("{stats}");
    assert!(output.contains("Number of Activities: 1"));
    assert!(output.contains("Average Duration: 90.00 minutes"));
}

#[test]
fn test_result_wrappers() {
    let details = monday();
    let gym = details.plan.activities()[0].clone();

    let created = format!("{}", CreateResult::new(details));
    assert!(created.starts_with("Created plan 3"));

    let added = format!("{}", CreateResult::new(gym.clone()));
    assert!(added.starts_with("Added activity 1"));

    let removed = format!(
        "{}",
        RemoveResult {
            plan_number: 3,
            activity: gym,
        }
    );
    assert_eq!(removed, "Removed activity 1 (Gym) from plan 3\n");

    assert_eq!(
        format!("{}", OperationStatus::success("Saved")),
        "Done: Saved\n"
    );
    assert!(format!("{}", OperationStatus::skipped("No file")).starts_with("Skipped:"));
}
