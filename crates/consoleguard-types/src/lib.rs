//! Stable DTOs and IDs used across the consoleguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted validation result
//! - stable rule IDs, in execution order
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod result;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use result::{Check, CheckStatus, SCHEMA_RESULT_V1, ValidationResult};
