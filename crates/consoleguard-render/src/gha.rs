use consoleguard_types::{CheckStatus, ValidationResult};

/// Render failed and warning records as GitHub Actions workflow command annotations.
///
/// Format: `::{level} title={name}::{message}`. Passing records are skipped.
pub fn render_github_annotations(result: &ValidationResult) -> Vec<String> {
    let mut out = Vec::new();

    for check in &result.checks {
        let level = match check.status {
            CheckStatus::Fail => "error",
            CheckStatus::Warning => "warning",
            CheckStatus::Pass => continue,
        };

        let mut message = check.message.clone();
        if let Some(details) = &check.details {
            message.push_str(" (");
            message.push_str(details);
            message.push(')');
        }

        out.push(format!(
            "::{} title={}::{}",
            level,
            escape_property(&check.name),
            escape_data(&message)
        ));
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

// Property values additionally reserve ':' and ','.
fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
