//! Core library for the Dayplan daily activity planner.
//!
//! This crate provides plan and activity management, plan statistics, and
//! whole-collection persistence to a local file.
//!
//! - [`PlanStore`] owns every plan and is the only place plans change.
//! - [`stats`] holds pure aggregations over a single plan.
//! - [`Planner`] wraps the store for async, concurrent callers and runs file
//!   I/O on blocking tasks.
//! - [`display`] formats models and results as markdown.
//!
//! # Quick Start
//!
//! ```rust
//! use dayplan_core::{models::Activity, stats, PlanStore};
//! use jiff::Timestamp;
//!
//! # fn example() -> dayplan_core::Result<()> {
//! let mut store = PlanStore::new();
//! store.create_plan("Monday");
//!
//! let start = Timestamp::from_second(1_700_035_200).unwrap();
//! let end = Timestamp::from_second(1_700_038_800).unwrap();
//! store.add_activity(0, Activity::new("Gym", "", start, end))?;
//!
//! let plan = &store.plans()[0];
//! assert_eq!(stats::count_activities(plan), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod stats;
pub mod store;

// Re-export commonly used types
pub use display::{CreateResult, OperationStatus, PlanSummaries, RemoveResult};
pub use error::{PlannerError, Result};
pub use models::{Activity, Plan, PlanDetails, PlanSummary, ScheduleItem};
pub use params::{AddActivity, CreatePlan, PlanFile, PlanRef, RemoveActivity};
pub use planner::{Planner, PlannerBuilder};
pub use stats::PlanStatistics;
pub use store::{PlanStore, DEFAULT_FILE_NAME};
