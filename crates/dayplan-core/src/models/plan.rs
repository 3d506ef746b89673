//! Plan model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{Activity, ScheduleItem};

/// Represents a titled, ordered collection of scheduled items.
///
/// Items are only added and removed through [`crate::PlanStore`], which keeps
/// their indexes equal to `1..=len` in sequence order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan<A = Activity> {
    /// Title of the plan, not required to be unique
    title: String,

    /// Scheduled items in display order
    #[serde(default = "Vec::new")]
    activities: Vec<A>,
}

impl<A: ScheduleItem> Plan<A> {
    /// Creates an empty plan with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            activities: Vec::new(),
        }
    }

    /// Title of the plan.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// All items of the plan in index order.
    pub fn activities(&self) -> &[A] {
        &self.activities
    }

    /// Looks up an item by its 1-based index.
    pub fn activity(&self, index: u32) -> Option<&A> {
        let position = usize::try_from(index).ok()?.checked_sub(1)?;
        self.activities.get(position)
    }

    /// Number of items in the plan.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the plan holds no items.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Appends an item, giving it the next index.
    pub(crate) fn push(&mut self, mut item: A) -> &A {
        item.set_index(index_for(self.activities.len()));
        self.activities.push(item);
        &self.activities[self.activities.len() - 1]
    }

    /// Removes the first item equal to `item`. Absent items are ignored.
    pub(crate) fn remove_first(&mut self, item: &A) -> Option<A>
    where
        A: PartialEq,
    {
        let position = self.activities.iter().position(|a| a == item)?;
        let removed = self.activities.remove(position);
        self.renumber();
        Some(removed)
    }

    /// Removes the item at the given 1-based index.
    pub(crate) fn remove_at(&mut self, index: u32) -> Option<A> {
        let position = usize::try_from(index).ok()?.checked_sub(1)?;
        if position >= self.activities.len() {
            return None;
        }
        let removed = self.activities.remove(position);
        self.renumber();
        Some(removed)
    }

    /// Reassigns indexes so they read `1..=len` in sequence order.
    pub(crate) fn renumber(&mut self) {
        for (position, item) in self.activities.iter_mut().enumerate() {
            item.set_index(index_for(position));
        }
    }
}

/// 1-based index for a 0-based position. Plans longer than `u32::MAX`
/// items share the last index.
fn index_for(position: usize) -> u32 {
    u32::try_from(position)
        .map_or(u32::MAX, |position| position.saturating_add(1))
}
