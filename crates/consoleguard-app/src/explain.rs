//! The `explain` use case: look up rule documentation.

use consoleguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the rule id.
    Found(Explanation),
    /// Unknown identifier; includes the available rule ids.
    NotFound {
        identifier: String,
        available_rule_ids: &'static [&'static str],
    },
}

/// Look up an explanation for a rule id.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_rule_ids: explain::all_rule_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.chars().count()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before:\n");
    out.push_str("```json\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After:\n");
    out.push_str("```json\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, rule_ids: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown rule id: {}\n\n", identifier));
    out.push_str("Available rule ids:\n");
    for id in rule_ids {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use consoleguard_types::ids;

    #[test]
    fn every_rule_id_is_explained() {
        for id in ids::ALL_RULES {
            assert!(
                matches!(run_explain(id), ExplainOutput::Found(_)),
                "missing explanation for {id}"
            );
        }
    }

    #[test]
    fn explain_unknown() {
        match run_explain("not_a_real_rule") {
            ExplainOutput::NotFound {
                identifier,
                available_rule_ids,
            } => {
                assert_eq!(identifier, "not_a_real_rule");
                assert_eq!(available_rule_ids, ids::ALL_RULES);
            }
            ExplainOutput::Found(_) => panic!("expected NotFound"),
        }
    }

    #[test]
    fn format_explanation_output() {
        let ExplainOutput::Found(exp) = run_explain(ids::RULE_NAT_GATEWAY) else {
            panic!("expected Found");
        };
        let formatted = format_explanation(&exp);
        assert!(formatted.starts_with(exp.title));
        assert!(formatted.contains("Remediation"));
        assert!(formatted.contains("```json"));
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["rule.one", "rule.two"]);
        assert!(formatted.contains("Unknown rule id: missing"));
        assert!(formatted.contains("  - rule.one\n  - rule.two\n"));
    }
}
