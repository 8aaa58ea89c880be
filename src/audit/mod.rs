//! The audit engine: freshness computation, cycle-safe traversal, and
//! report interpretation.
//!
//! A project audit flows top-down: [`project::ProjectAuditor`] runs one
//! [`unit`] audit per target, every audit shares one memoizing
//! [`cache::FreshnessCache`], and the resulting [`report::ProjectReport`]
//! is flattened into build instructions by [`inspect::unroll`].

pub mod cache;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod inspect;
pub mod project;
pub mod report;
pub mod unit;

pub use cache::{FileVerdict, FreshnessCache};
pub use inspect::unroll;
pub use project::ProjectAuditor;
pub use report::{BuildInstruction, ProjectReport, UnitReport};
pub use unit::UnitAuditor;
