//! In-memory ownership of every plan and the operations that mutate them.
//!
//! [`PlanStore`] is the only place where plans and activities change, which
//! keeps the activity index invariant in a single spot: after any call
//! returns, the activities of each plan are numbered `1..=len` in order.
//! Readers get shared slices through [`PlanStore::plans`] and
//! [`PlanStore::plan`]; there is no mutable access from outside the crate.
//!
//! Plans are addressed by their 0-based position in creation order.
//!
//! # Examples
//!
//! ```rust
//! use dayplan_core::{models::Activity, PlanStore};
//! use jiff::Timestamp;
//!
//! # fn example() -> dayplan_core::Result<()> {
//! let mut store = PlanStore::new();
//! store.create_plan("Monday");
//!
//! let start = Timestamp::from_second(1_700_000_000).unwrap();
//! let end = Timestamp::from_second(1_700_003_600).unwrap();
//! let gym = store.add_activity(0, Activity::new("Gym", "", start, end))?;
//! assert_eq!(gym.index(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use jiff::Timestamp;
use log::debug;

use crate::{
    error::{PlannerError, Result},
    models::{Activity, Plan},
};

pub mod file;


/// Default file name used for persisting the plan collection.
pub const DEFAULT_FILE_NAME: &str = "plans.dat";

/// Owner of the plan collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanStore {
    plans: Vec<Plan>,
}

impl PlanStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All plans in creation order.
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// The plan at a 0-based position, if any.
    pub fn plan(&self, position: usize) -> Option<&Plan> {
        self.plans.get(position)
    }

    /// Number of plans in the store.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Whether the store holds no plans.
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Creates a plan with the given title and a default activity starting now.
    ///
    /// The title is not validated and need not be unique.
    pub fn create_plan(&mut self, title: impl Into<String>) -> &Plan {
        self.create_plan_at(title, Timestamp::now())
    }

    /// Creates a plan whose default activity starts at `now`.
    pub fn create_plan_at(&mut self, title: impl Into<String>, now: Timestamp) -> &Plan {
        self.plans.push(Plan::new(title));
        let position = self.plans.len() - 1;
        let plan = &mut self.plans[position];
        debug!("Created plan {} '{}'", position + 1, plan.title());

        Self::append_activity(plan, Activity::default_at(now));
        &self.plans[position]
    }

    /// Appends `activity` to the plan at `position`, assigning it the next
    /// index.
    ///
    /// The time range is not checked; callers validate `start < end`.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if no plan exists at `position`.
    pub fn add_activity(&mut self, position: usize, activity: Activity) -> Result<&Activity> {
        let plan = self.plan_mut(position)?;
        Ok(Self::append_activity(plan, activity))
    }

    /// Removes the first activity equal to `activity` from the plan at
    /// `position` and renumbers the rest.
    ///
    /// Returns the removed activity, or `None` when nothing matched; a missing
    /// activity leaves the plan untouched.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if no plan exists at `position`.
    pub fn remove_activity(
        &mut self,
        position: usize,
        activity: &Activity,
    ) -> Result<Option<Activity>> {
        let plan = self.plan_mut(position)?;
        let removed = plan.remove_first(activity);
        match &removed {
            Some(a) => debug!("Removed activity '{}' from plan '{}'", a.name, plan.title()),
            None => debug!("Activity '{}' not in plan '{}'", activity.name, plan.title()),
        }
        Ok(removed)
    }

    /// Removes the activity with the given 1-based index from the plan at
    /// `position` and renumbers the rest.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if no plan exists at `position`
    /// and `PlannerError::ActivityNotFound` if the index is out of range.
    pub fn remove_activity_at(&mut self, position: usize, index: u32) -> Result<Activity> {
        let plan = self.plan_mut(position)?;
        let removed = plan
            .remove_at(index)
            .ok_or_else(|| PlannerError::ActivityNotFound {
                plan: plan.title().to_string(),
                index,
            })?;
        debug!("Removed activity {index} from plan '{}'", plan.title());
        Ok(removed)
    }

    fn plan_mut(&mut self, position: usize) -> Result<&mut Plan> {
        self.plans
            .get_mut(position)
            .ok_or(PlannerError::PlanNotFound {
                number: position + 1,
            })
    }

    fn append_activity(plan: &mut Plan, activity: Activity) -> &Activity {
        let added = plan.push(activity);
        debug!("Added activity {} '{}'", added.index(), added.name);
        added
    }
}
