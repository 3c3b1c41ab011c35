//! Render use cases: text, markdown, and GitHub annotations from in-memory results.

use consoleguard_types::ValidationResult;

pub fn render_text(result: &ValidationResult) -> String {
    consoleguard_render::render_text(result)
}

pub fn render_markdown(result: &ValidationResult) -> String {
    consoleguard_render::render_markdown(result)
}

pub fn render_annotations(result: &ValidationResult, max: usize) -> Vec<String> {
    consoleguard_render::render_github_annotations(result)
        .into_iter()
        .take(max)
        .collect()
}
