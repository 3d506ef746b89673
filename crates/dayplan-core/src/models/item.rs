//! Capability trait shared by everything a plan can schedule.

use jiff::{SignedDuration, Timestamp};

/// An entry that occupies a time range and a position inside a plan.
///
/// Plans are generic over this trait so the ordering and statistics logic
/// does not depend on the concrete record type.
pub trait ScheduleItem {
    /// 1-based position within the owning plan.
    fn index(&self) -> u32;

    /// Overwrites the position. Only the owning plan calls this.
    fn set_index(&mut self, index: u32);

    /// Start of the scheduled range.
    fn start_time(&self) -> Timestamp;

    /// End of the scheduled range.
    fn end_time(&self) -> Timestamp;

    /// Length of the range. Negative when the range is inverted.
    fn duration(&self) -> SignedDuration {
        self.end_time().duration_since(self.start_time())
    }
}
