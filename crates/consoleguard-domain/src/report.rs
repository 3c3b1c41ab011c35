use consoleguard_types::{Check, CheckStatus, ValidationResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pass: usize,
    pub fail: usize,
    pub warning: usize,
}

impl StatusCounts {
    pub fn from_checks(checks: &[Check]) -> Self {
        let mut counts = StatusCounts::default();
        for c in checks {
            match c.status {
                CheckStatus::Pass => counts.pass += 1,
                CheckStatus::Fail => counts.fail += 1,
                CheckStatus::Warning => counts.warning += 1,
            }
        }
        counts
    }
}

/// Fold the ordered checks into the final result. `valid` is true iff no
/// check failed; warnings never affect it.
pub fn aggregate(checks: Vec<Check>) -> ValidationResult {
    let counts = StatusCounts::from_checks(&checks);
    let valid = counts.fail == 0;

    ValidationResult {
        valid,
        summary: summarize(valid, counts),
        checks,
    }
}

fn summarize(valid: bool, counts: StatusCounts) -> String {
    if valid {
        format!(
            "✓ Validation passed. All required checks passed ({} passed, {} warnings).",
            counts.pass, counts.warning
        )
    } else {
        format!(
            "✗ Validation failed. {} check(s) failed, {} passed, {} warnings.",
            counts.fail, counts.pass, counts.warning
        )
    }
}
