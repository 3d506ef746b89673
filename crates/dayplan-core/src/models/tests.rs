use jiff::{SignedDuration, Timestamp};

use super::*;

fn at(second: i64) -> Timestamp {
    Timestamp::from_second(second).unwrap()
}

fn sample_activity(name: &str) -> Activity {
    Activity::new(name, "", at(1_700_000_000), at(1_700_001_800))
}

#[test]
fn test_default_activity_spans_one_hour() {
    let now = at(1_704_067_200);
    let default = Activity::default_at(now);

    assert_eq!(default.name, DEFAULT_ACTIVITY_NAME);
    assert_eq!(default.description, DEFAULT_ACTIVITY_DESCRIPTION);
    assert_eq!(default.start_time, now);
    assert_eq!(default.duration(), SignedDuration::from_hours(1));
}

#[test]
fn test_default_activity_near_max_timestamp() {
    let default = Activity::default_at(Timestamp::MAX);
    assert_eq!(default.end_time, Timestamp::MAX);
}

#[test]
fn test_inverted_range_has_negative_duration() {
    let inverted = Activity::new("Back", "", at(1_700_003_600), at(1_700_000_000));
    assert!(inverted.duration().is_negative());
}

#[test]
fn test_plan_push_and_lookup() {
    let mut plan = Plan::new("Lookup");
    plan.push(sample_activity("First"));
    plan.push(sample_activity("Second"));

    assert_eq!(plan.len(), 2);
    assert_eq!(plan.activity(1).map(|a| a.name.as_str()), Some("First"));
    assert_eq!(plan.activity(2).map(|a| a.name.as_str()), Some("Second"));
    assert!(plan.activity(0).is_none());
    assert!(plan.activity(3).is_none());
}

#[test]
fn test_plan_remove_at_renumbers() {
    let mut plan = Plan::new("Renumber");
    for name in ["A", "B", "C", "D"] {
        plan.push(sample_activity(name));
    }

    let removed = plan.remove_at(2).unwrap();
    assert_eq!(removed.name, "B");
    assert!(plan.remove_at(9).is_none());

    let pairs: Vec<_> = plan
        .activities()
        .iter()
        .map(|a| (a.index(), a.name.as_str()))
        .collect();
    assert_eq!(pairs, vec![(1, "A"), (2, "C"), (3, "D")]);
}

#[test]
fn test_activity_serializes_named_fields() {
    let mut plan = Plan::new("Serialized");
    plan.push(Activity::new("Gym", "Leg day", at(1_700_035_200), at(1_700_038_800)));

    let value = serde_json::to_value(&plan).unwrap();
    assert_eq!(value["title"], "Serialized");
    let activity = &value["activities"][0];
    assert_eq!(activity["index"], 1);
    assert_eq!(activity["name"], "Gym");
    assert_eq!(activity["description"], "Leg day");
    assert_eq!(activity["start_time"], "2023-11-15T08:00:00Z");
    assert_eq!(activity["end_time"], "2023-11-15T09:00:00Z");
}

#[test]
fn test_plan_without_activities_field_deserializes_empty() {
    let plan: Plan = serde_json::from_str(r#"{"title": "Bare"}"#).unwrap();
    assert_eq!(plan.title(), "Bare");
    assert!(plan.is_empty());
}

#[test]
fn test_plan_summary_from_plan() {
    let mut plan = Plan::new("Summary");
    plan.push(sample_activity("Half hour"));

    let summary = PlanSummary::from_plan(2, &plan);
    assert_eq!(summary.number, 2);
    assert_eq!(summary.title, "Summary");
    assert_eq!(summary.activity_count, 1);
    assert_eq!(summary.average_duration_minutes, 30.0);
}
