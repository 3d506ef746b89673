//! Data models for plans and activities.
//!
//! This module contains the core domain models of the planner. Display
//! implementations for these models are located in [`crate::display::models`]
//! to keep data structures apart from presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use dayplan_core::models::{Activity, Plan};
//! use jiff::Timestamp;
//!
//! let start = Timestamp::from_second(1_700_000_000).unwrap();
//! let end = Timestamp::from_second(1_700_003_600).unwrap();
//! let activity = Activity::new("Gym", "Leg day", start, end);
//! assert_eq!(activity.index(), 0);
//!
//! let plan: Plan = Plan::new("Monday");
//! assert!(plan.is_empty());
//! ```

pub mod activity;
pub mod item;
pub mod plan;
pub mod summary;

#[cfg(test)]
mod tests;

pub use activity::{Activity, DEFAULT_ACTIVITY_DESCRIPTION, DEFAULT_ACTIVITY_NAME};
pub use item::ScheduleItem;
pub use plan::Plan;
pub use summary::{PlanDetails, PlanSummary};
