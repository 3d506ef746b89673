mod common;

use dayplan_core::{
    AddActivity, CreatePlan, PlanFile, PlanRef, PlannerBuilder, PlannerError, RemoveActivity,
};
use jiff::Timestamp;

use common::create_test_planner;

fn activity(plan: usize, name: &str, start: i64, end: i64) -> AddActivity {
    AddActivity {
        plan,
        name: name.to_string(),
        description: String::new(),
        start_time: Timestamp::from_second(start).unwrap(),
        end_time: Timestamp::from_second(end).unwrap(),
    }
}

#[tokio::test]
async fn test_complete_plan_workflow() {
    let (temp_dir, planner) = create_test_planner().await;

    let monday = planner
        .create_plan(&CreatePlan {
            title: "Monday".to_string(),
        })
        .await
        .expect("Failed to create plan");
    let tuesday = planner
        .create_plan(&CreatePlan {
            title: "Tuesday".to_string(),
        })
        .await
        .expect("Failed to create plan");

    planner
        .add_activity(&activity(monday.number, "Gym", 1_700_035_200, 1_700_038_800))
        .await
        .expect("Failed to add activity");
    planner
        .add_activity(&activity(monday.number, "Read", 1_700_040_000, 1_700_041_800))
        .await
        .expect("Failed to add activity");
    planner
        .remove_activity(&RemoveActivity {
            plan: tuesday.number,
            index: 1,
        })
        .await
        .expect("Failed to remove activity");

    let stats = planner
        .plan_statistics(&PlanRef {
            number: monday.number,
        })
        .await
        .expect("Failed to compute statistics");
    assert_eq!(stats.activity_count, 3);
    assert_eq!(stats.average_duration_minutes, 50.0);

    planner.save().await.expect("Failed to save");

    let reopened = PlannerBuilder::new()
        .with_data_path(Some(temp_dir.path().join("plans.dat")))
        .build()
        .await
        .expect("Failed to reopen planner");

    let summaries = reopened.list_plans().await;
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].activity_count, 3);
    assert_eq!(summaries[1].activity_count, 0);

    let details = reopened
        .show_plan(&PlanRef { number: 1 })
        .await
        .expect("Failed to show plan");
    let names: Vec<_> = details
        .plan
        .activities()
        .iter()
        .map(|a| (a.index(), a.name.clone()))
        .collect();
    assert_eq!(
        names,
        vec![
            (1, "Default Activity".to_string()),
            (2, "Gym".to_string()),
            (3, "Read".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_remove_activity_out_of_range() {
    let (_temp_dir, planner) = create_test_planner().await;
    planner
        .create_plan(&CreatePlan::default())
        .await
        .expect("Failed to create plan");

    let result = planner
        .remove_activity(&RemoveActivity { plan: 1, index: 2 })
        .await;
    assert!(matches!(
        result,
        Err(PlannerError::ActivityNotFound { index: 2, .. })
    ));

    let result = planner
        .remove_activity(&RemoveActivity { plan: 2, index: 1 })
        .await;
    assert!(matches!(result, Err(PlannerError::PlanNotFound { number: 2 })));
}

#[tokio::test]
async fn test_build_with_corrupt_data_file_fails() {
    let (temp_dir, _planner) = create_test_planner().await;
    let path = temp_dir.path().join("corrupt.dat");
    std::fs::write(&path, "garbage").unwrap();

    let result = PlannerBuilder::new()
        .with_data_path(Some(&path))
        .build()
        .await;
    assert!(matches!(result, Err(PlannerError::Serialization { .. })));
}

#[tokio::test]
async fn test_export_to_unwritable_path() {
    let (temp_dir, planner) = create_test_planner().await;
    planner.create_plan(&CreatePlan::default()).await.unwrap();

    let result = planner
        .save_to(&PlanFile {
            path: temp_dir.path().join("missing").join("out.dat"),
        })
        .await;
    assert!(matches!(result, Err(PlannerError::FileSystem { .. })));
}
