//! Use case orchestration for consoleguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain, and
//! render layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod render;
mod result;
mod validate;

pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_annotations, render_markdown, render_text};
pub use result::{decode_error_result, parse_result_json, serialize_result, write_result};
pub use validate::{ValidateInput, ValidateOutput, exit_code, run_validate};
