//! Display implementations for domain models.
//!
//! Output is markdown so the CLI can render it with styling, while still
//! reading well as plain text.

use std::fmt;

use super::datetime::LocalTimeRange;
use crate::{
    models::{Activity, PlanDetails, PlanSummary},
    stats::PlanStatistics,
};

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {}", self.index, self.name)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Time: {}",
            LocalTimeRange {
                start: &self.start_time,
                end: &self.end_time,
            }
        )?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for PlanDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.number, self.plan.title())?;
        writeln!(f)?;

        if self.plan.is_empty() {
            writeln!(f, "No activities in this plan.")?;
            return Ok(());
        }

        writeln!(f, "## Activities")?;
        writeln!(f)?;
        for activity in self.plan.activities() {
            write!(f, "{activity}")?;
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.activity_count == 1 {
            "activity"
        } else {
            "activities"
        };
        writeln!(
            f,
            "- **{}. {}** ({} {noun}, average {:.2} minutes)",
            self.number, self.title, self.activity_count, self.average_duration_minutes
        )
    }
}

impl fmt::Display for PlanStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Statistics: {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "Number of Activities: {}", self.activity_count)?;
        writeln!(
            f,
            "Average Duration: {:.2} minutes",
            self.average_duration_minutes
        )?;
        writeln!(f, "Total Duration: {:.2} minutes", self.total_duration_minutes)
    }
}
