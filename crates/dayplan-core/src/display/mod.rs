//! Display formatting for models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context such as list headers or confirmation lines.
//! Everything is emitted as markdown and rendered by the CLI.
//!
//! - [`collections`]: plan list wrapper ([`PlanSummaries`])
//! - [`results`]: create/remove confirmations and [`OperationStatus`]
//! - [`datetime`]: local time formatting
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

#[cfg(test)]
mod tests;

pub use collections::PlanSummaries;
pub use datetime::LocalTimeRange;
pub use results::{CreateResult, OperationStatus, RemoveResult};
