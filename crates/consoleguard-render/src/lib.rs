//! Rendering utilities for consoles and CI surfaces (Markdown, GitHub annotations, plain text).

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod text;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use text::render_text;

use consoleguard_types::CheckStatus;

pub(crate) fn status_icon(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "✓",
        CheckStatus::Fail => "✗",
        CheckStatus::Warning => "⚠",
    }
}
