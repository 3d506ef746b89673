//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::PlanSummary;

/// Newtype wrapper for displaying the plan list.
///
/// # Examples
///
/// ```rust
/// use dayplan_core::{display::PlanSummaries, models::PlanSummary};
///
/// let summaries = PlanSummaries(vec![PlanSummary {
///     number: 1,
///     title: "Monday".to_string(),
///     activity_count: 2,
///     average_duration_minutes: 45.0,
/// }]);
/// let output = format!("{summaries}");
/// assert!(output.contains("1. Monday"));
/// assert!(output.contains("2 activities, average 45.00 minutes"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanSummaries {
    type Item = PlanSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }

        writeln!(f, "# Plans")?;
        writeln!(f)?;
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}
