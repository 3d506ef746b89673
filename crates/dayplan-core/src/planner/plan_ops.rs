//! Plan operations for the Planner.

use std::path::PathBuf;

use log::debug;
use tokio::task;

use super::Planner;
use crate::{
    display::PlanSummaries,
    error::{PlannerError, Result},
    models::{PlanDetails, PlanSummary},
    params::{CreatePlan, PlanFile, PlanRef},
    stats::PlanStatistics,
    store::PlanStore,
};

impl Planner {
    /// Creates a new plan with the given title. The plan starts with the
    /// default activity spanning the next hour.
    pub async fn create_plan(&self, params: &CreatePlan) -> Result<PlanDetails> {
        let mut store = self.store.lock().await;
        let plan = store.create_plan(params.title.as_str()).clone();
        Ok(PlanDetails {
            number: store.len(),
            plan,
        })
    }

    /// Lists every plan as a summary, in creation order.
    pub async fn list_plans(&self) -> PlanSummaries {
        let store = self.store.lock().await;
        let summaries = store
            .plans()
            .iter()
            .enumerate()
            .map(|(position, plan)| PlanSummary::from_plan(position + 1, plan))
            .collect();
        PlanSummaries(summaries)
    }

    /// Retrieves a plan with all of its activities.
    pub async fn show_plan(&self, params: &PlanRef) -> Result<PlanDetails> {
        let position = params.position()?;
        let store = self.store.lock().await;
        let plan = store.plan(position).ok_or(PlannerError::PlanNotFound {
            number: params.number,
        })?;
        Ok(PlanDetails {
            number: params.number,
            plan: plan.clone(),
        })
    }

    /// Computes the statistics shown for a plan.
    pub async fn plan_statistics(&self, params: &PlanRef) -> Result<PlanStatistics> {
        let position = params.position()?;
        let store = self.store.lock().await;
        let plan = store.plan(position).ok_or(PlannerError::PlanNotFound {
            number: params.number,
        })?;
        Ok(PlanStatistics::from_plan(plan))
    }

    /// Writes the collection to the planner's data file.
    pub async fn save(&self) -> Result<()> {
        self.write_to(self.data_path.clone()).await
    }

    /// Writes the collection to an arbitrary file.
    pub async fn save_to(&self, params: &PlanFile) -> Result<()> {
        self.write_to(params.path.clone()).await
    }

    /// Replaces the collection with the plans saved in a file.
    ///
    /// Returns `false` without touching the current plans when the file does
    /// not exist. A failed read also leaves the current plans in place.
    pub async fn load_from(&self, params: &PlanFile) -> Result<bool> {
        let path = params.path.clone();
        let (loaded, incoming) = task::spawn_blocking(move || {
            let mut incoming = PlanStore::new();
            let loaded = incoming.load_plans_from_file(&path)?;
            Ok::<_, PlannerError>((loaded, incoming))
        })
        .await
        .map_err(PlannerError::join)??;

        if loaded {
            debug!("Replacing plans with {} from {}", incoming.len(), params.path.display());
            *self.store.lock().await = incoming;
        }
        Ok(loaded)
    }

    async fn write_to(&self, path: PathBuf) -> Result<()> {
        let _saving = self.save_lock.lock().await;
        let snapshot = self.snapshot().await;
        task::spawn_blocking(move || snapshot.save_plans_to_file(&path))
            .await
            .map_err(PlannerError::join)?
    }
}
