//! High-level planner API for managing plans and activities.
//!
//! [`Planner`] is the entry point used by interface layers. It owns a
//! [`PlanStore`] behind an async mutex so that concurrent callers are
//! serialised, and it runs all file I/O on blocking tasks. Saves are
//! serialised by a second lock, so the file always ends up holding the
//! newest snapshot.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Interface    │    │     Planner     │    │    PlanStore    │
//! │  (CLI, params)  │───▶│ (plan_ops,      │───▶│ (store/, file)  │
//! │                 │    │  activity_ops)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_ops`]: Plan creation, listing, statistics and persistence
//! - [`activity_ops`]: Adding and removing activities
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use dayplan_core::{PlannerBuilder, params::{CreatePlan, PlanRef}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_data_path(Some("/tmp/plans.dat"))
//!     .build()
//!     .await?;
//!
//! let created = planner
//!     .create_plan(&CreatePlan { title: "Monday".to_string() })
//!     .await?;
//! let stats = planner
//!     .plan_statistics(&PlanRef { number: created.number })
//!     .await?;
//! println!("{stats}");
//!
//! planner.save().await?;
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::sync::Mutex;

use crate::store::PlanStore;

// Module declarations
pub mod activity_ops;
pub mod builder;
pub mod plan_ops;


// Re-export the main types
pub use builder::PlannerBuilder;

/// Main planner interface for managing plans and activities.
pub struct Planner {
    pub(crate) data_path: PathBuf,
    pub(crate) store: Arc<Mutex<PlanStore>>,
    /// Held across snapshot, write and rename of every save.
    pub(crate) save_lock: Mutex<()>,
}

impl Planner {
    /// Creates a new planner around an already loaded store.
    pub(crate) fn new(data_path: PathBuf, store: PlanStore) -> Self {
        Self {
            data_path,
            store: Arc::new(Mutex::new(store)),
            save_lock: Mutex::new(()),
        }
    }

    /// File the planner loads from and saves to.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Copy of the current plan collection.
    pub async fn snapshot(&self) -> PlanStore {
        self.store.lock().await.clone()
    }
}
