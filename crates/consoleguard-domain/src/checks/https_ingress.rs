use crate::context::RegionContext;
use crate::model::{TYPE_SECURITY_GROUP, TemplateModel, Value};
use consoleguard_types::{Check, CheckStatus};

const HTTPS_PORT: f64 = 443.0;

pub fn run(model: &TemplateModel, _ctx: &RegionContext) -> Vec<Check> {
    let found = model
        .of_type(TYPE_SECURITY_GROUP)
        .filter_map(|(_, sg)| sg.property("SecurityGroupIngress").and_then(Value::as_list))
        .flatten()
        .any(allows_https);

    vec![Check::outcome(
        "Security Group: HTTPS Access",
        found,
        CheckStatus::Warning,
        "Security group allows HTTPS (port 443) traffic",
        "No security group rule found for HTTPS (port 443)",
    )]
}

/// `(FromPort == 443 || tcp) && (ToPort == 443 || tcp)`.
///
/// Any TCP rule matches regardless of its port range.
// TODO: tighten to `FromPort == 443 && ToPort == 443 && tcp` once the
// loose match is confirmed unintended.
fn allows_https(rule: &Value) -> bool {
    let is_tcp = rule.get("IpProtocol").and_then(Value::as_str) == Some("tcp");
    let port_is_https = |key: &str| rule.get(key).and_then(Value::as_number) == Some(HTTPS_PORT);

    (port_is_https("FromPort") || is_tcp) && (port_is_https("ToPort") || is_tcp)
}
