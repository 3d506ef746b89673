use dayplan_core::PlannerBuilder;
use tempfile::TempDir;

/// Helper function to create a test planner
pub async fn create_test_planner() -> (TempDir, dayplan_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data_path = temp_dir.path().join("plans.dat");
    let planner = PlannerBuilder::new()
        .with_data_path(Some(&data_path))
        .build()
        .await
        .expect("Failed to create planner");
    (temp_dir, planner)
}
