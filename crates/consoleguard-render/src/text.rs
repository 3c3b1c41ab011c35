use crate::status_icon;
use consoleguard_types::ValidationResult;

/// Console report: a header, one block per record, and the summary line.
pub fn render_text(result: &ValidationResult) -> String {
    let mut out = String::new();

    out.push_str("\n=== AWS Console Private Access Validation Results ===\n\n");
    out.push_str(&format!(
        "Valid: {}\n\n",
        if result.valid { "✓ YES" } else { "✗ NO" }
    ));

    out.push_str("Checks:\n");
    for check in &result.checks {
        out.push_str(&format!("  {} {}\n", status_icon(check.status), check.name));
        out.push_str(&format!("    Status: {}\n", check.status.as_str()));
        out.push_str(&format!("    Message: {}\n", check.message));
        if let Some(details) = &check.details {
            out.push_str(&format!("    Details: {}\n", details));
        }
    }

    out.push_str(&format!("\nSummary: {}\n", result.summary));
    out
}
