use crate::status_icon;
use consoleguard_types::{CheckStatus, ValidationResult};

pub fn render_markdown(result: &ValidationResult) -> String {
    let mut out = String::new();

    out.push_str("# Console private access report\n\n");
    let verdict = if result.valid { "VALID" } else { "INVALID" };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Checks: {} passed / {} failed / {} warnings\n\n",
        verdict,
        result.count(CheckStatus::Pass),
        result.count(CheckStatus::Fail),
        result.count(CheckStatus::Warning),
    ));

    out.push_str(&format!("> {}\n\n", result.summary));

    if result.checks.is_empty() {
        out.push_str("No checks.\n");
        return out;
    }

    out.push_str("## Checks\n\n");
    out.push_str("| | Check | Status | Message |\n|---|---|---|---|\n");
    for check in &result.checks {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            status_icon(check.status),
            escape_cell(&check.name),
            check.status.as_str(),
            escape_cell(&check.message),
        ));
    }

    let detailed: Vec<_> = result
        .checks
        .iter()
        .filter_map(|c| c.details.as_deref().map(|d| (c, d)))
        .collect();
    if !detailed.is_empty() {
        out.push_str("\n## Details\n\n");
        for (check, details) in detailed {
            out.push_str(&format!("- **{}**: {}\n", check.name, details.replace('\n', " ")));
        }
    }

    out
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}
