//! Pure template validation (no IO).
//!
//! Input: a decoded template model and a region.
//! Output: ordered checks + validity + summary.

#![forbid(unsafe_code)]

pub mod context;
pub mod model;
pub mod report;
pub mod resolve;

mod engine;
pub mod checks;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;

pub use context::RegionContext;
pub use engine::validate;
pub use model::{Literal, Resource, TemplateError, TemplateModel, Value};
pub use report::{StatusCounts, aggregate};
pub use resolve::resolve;
