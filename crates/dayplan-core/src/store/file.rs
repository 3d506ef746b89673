//! Whole-collection persistence for the plan store.
//!
//! The collection is written as a JSON array of plans. Every value is a
//! named field, so readers can ignore fields they do not know and fall back
//! to defaults for ones that are missing. Timestamps are stored as RFC 3339
//! strings and round-trip exactly.

use std::{
    fs,
    io::{ErrorKind, Write},
    path::Path,
};

use log::debug;
use tempfile::NamedTempFile;

use super::PlanStore;
use crate::{
    error::{PlannerError, Result},
    models::Plan,
};

impl PlanStore {
    /// Writes every plan, including nested activities, to `path`.
    ///
    /// An existing file is replaced. The data is first written to a uniquely
    /// named temporary file in the same directory and then renamed over the
    /// target, so a failed save leaves the previous file intact.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the file cannot be written and
    /// `PlannerError::Serialization` if encoding fails.
    pub fn save_plans_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = serde_json::to_vec_pretty(&self.plans)?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staging =
            NamedTempFile::new_in(parent).map_err(|e| PlannerError::file_system(path, e))?;
        staging
            .write_all(&bytes)
            .map_err(|e| PlannerError::file_system(path, e))?;
        staging
            .persist(path)
            .map_err(|e| PlannerError::file_system(path, e.error))?;

        debug!("Saved {} plans to {}", self.plans.len(), path.display());
        Ok(())
    }

    /// Replaces the whole collection with the contents of `path`.
    ///
    /// A missing file is not an error: the current plans are kept and
    /// `Ok(false)` is returned. A path naming a directory or anything else
    /// that is not a regular file is treated the same way. On success the
    /// plans read from disk replace the in-memory ones and `Ok(true)` is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the file exists but cannot be
    /// read and `PlannerError::Serialization` if its content is not a plan
    /// collection. In both cases the in-memory plans are left unchanged.
    pub fn load_plans_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<bool> {
        let path = path.as_ref();
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => {}
            Ok(_) => {
                debug!("{} is not a regular file, keeping current plans", path.display());
                return Ok(false);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No plan file at {}, keeping current plans", path.display());
                return Ok(false);
            }
            Err(e) => return Err(PlannerError::file_system(path, e)),
        }

        let bytes = fs::read(path).map_err(|e| PlannerError::file_system(path, e))?;

        let mut plans: Vec<Plan> = serde_json::from_slice(&bytes)?;
        for plan in &mut plans {
            plan.renumber();
        }

        debug!("Loaded {} plans from {}", plans.len(), path.display());
        self.plans = plans;
        Ok(true)
    }

    /// Creates a store from `path`, or an empty one if the file is missing.
    ///
    /// # Errors
    ///
    /// See [`PlanStore::load_plans_from_file`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut store = Self::new();
        store.load_plans_from_file(path)?;
        Ok(store)
    }
}
