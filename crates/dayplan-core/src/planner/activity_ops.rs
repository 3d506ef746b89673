//! Activity operations for the Planner.

use super::Planner;
use crate::{
    error::Result,
    models::Activity,
    params::{AddActivity, PlanRef, RemoveActivity},
};

impl Planner {
    /// Adds an activity to the end of a plan.
    ///
    /// Rejects activities whose start time is not before their end time.
    pub async fn add_activity(&self, params: &AddActivity) -> Result<Activity> {
        let activity = params.validate()?;
        let position = PlanRef {
            number: params.plan,
        }
        .position()?;

        let mut store = self.store.lock().await;
        store.add_activity(position, activity).cloned()
    }

    /// Removes an activity by its index and renumbers the remaining ones.
    pub async fn remove_activity(&self, params: &RemoveActivity) -> Result<Activity> {
        let position = PlanRef {
            number: params.plan,
        }
        .position()?;

        let mut store = self.store.lock().await;
        store.remove_activity_at(position, params.index)
    }
}
