//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    store::{PlanStore, DEFAULT_FILE_NAME},
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    data_path: Option<PathBuf>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { data_path: None }
    }

    /// Sets a custom plan file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/dayplan/plans.dat` or `~/.local/share/dayplan/plans.dat`
    pub fn with_data_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured planner, loading any plans already saved at the
    /// data path.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the data directory cannot be
    /// created or the file cannot be read, and `PlannerError::Serialization`
    /// if the existing file is not a plan collection.
    pub async fn build(self) -> Result<Planner> {
        let data_path = if let Some(path) = self.data_path {
            path
        } else {
            Self::default_data_path()?
        };

        if let Some(parent) = data_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| PlannerError::file_system(parent, e))?;
        }

        let path = data_path.clone();
        let store = task::spawn_blocking(move || PlanStore::open(&path))
            .await
            .map_err(PlannerError::join)??;

        Ok(Planner::new(data_path, store))
    }

    /// Returns the default plan file path following XDG Base Directory
    /// specification.
    fn default_data_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("dayplan")
            .place_data_file(DEFAULT_FILE_NAME)
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
