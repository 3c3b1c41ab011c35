use crate::checks::utils::endpoint_label;
use crate::context::RegionContext;
use crate::model::{TemplateModel, Value};
use consoleguard_types::{Check, CheckStatus};

pub const DETAILS_NO_STATEMENTS: &str = "Policy has no statements";
pub const DETAILS_ACCOUNT_RESTRICTED: &str = "Policy restricts access to specific account(s)";
pub const DETAILS_UNRESTRICTED: &str = "Policy does not restrict access by account";

const PRINCIPAL_ACCOUNT_KEY: &str = "aws:PrincipalAccount";

pub fn run(model: &TemplateModel, ctx: &RegionContext) -> Vec<Check> {
    let mut out = Vec::new();

    for (id, endpoint) in model.interface_endpoints() {
        let label = endpoint_label(id, endpoint, ctx);

        let policy = endpoint.property("PolicyDocument").filter(|p| p.is_truthy());
        out.push(
            Check::outcome(
                format!("Endpoint Policy: {label}"),
                policy.is_some(),
                CheckStatus::Fail,
                format!("{label} endpoint has a policy attached"),
                format!("{label} endpoint is missing a policy"),
            )
            .with_details(policy.map(|p| describe_policy(p).to_string())),
        );

        out.push(Check::outcome(
            format!("Private DNS: {label}"),
            endpoint.has_truthy("PrivateDnsEnabled"),
            CheckStatus::Fail,
            format!("{label} endpoint has private DNS enabled"),
            format!("{label} endpoint does not have private DNS enabled"),
        ));
    }

    out
}

/// Summarize an attached policy document.
///
/// Only the first statement is inspected: a restrictive condition in a later
/// statement is reported as unrestricted.
pub fn describe_policy(policy: &Value) -> &'static str {
    let first = match policy.get("Statement").filter(|s| s.is_truthy()) {
        None => return DETAILS_NO_STATEMENTS,
        Some(Value::List(statements)) => match statements.first() {
            Some(first) => first,
            None => return DETAILS_NO_STATEMENTS,
        },
        // IAM allows a single statement object in place of a list.
        Some(single @ Value::Mapping(_)) => single,
        // Present but not a statement shape: nothing to find a condition in.
        Some(_) => return DETAILS_UNRESTRICTED,
    };

    let restricted = first
        .get("Condition")
        .and_then(|c| c.get("StringEquals"))
        .and_then(|c| c.get(PRINCIPAL_ACCOUNT_KEY))
        .is_some_and(Value::is_truthy);

    if restricted {
        DETAILS_ACCOUNT_RESTRICTED
    } else {
        DETAILS_UNRESTRICTED
    }
}
