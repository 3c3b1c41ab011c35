use crate::checks::utils::service_name;
use crate::context::RegionContext;
use crate::model::TemplateModel;
use consoleguard_types::{Check, CheckStatus};

/// Services that need an interface endpoint for private console access.
pub const REQUIRED_SERVICES: &[&str] = &["console", "signin", "ssm", "ec2messages", "ssmmessages"];

pub fn run(model: &TemplateModel, ctx: &RegionContext) -> Vec<Check> {
    let resolved: Vec<String> = model
        .interface_endpoints()
        .filter_map(|(_, r)| service_name(r, ctx))
        .collect();

    REQUIRED_SERVICES
        .iter()
        .map(|service| {
            let expected = ctx.service_name(service);
            let found = resolved.iter().any(|name| names_service(name, &expected));
            Check::outcome(
                format!("VPC Endpoint: {service}"),
                found,
                CheckStatus::Fail,
                format!("Interface VPC endpoint for {service} found"),
                format!("Missing interface VPC endpoint for {service}"),
            )
        })
        .collect()
}

/// `resolved` contains `expected` as a whole service token: the match must
/// not run on into more name characters, so `...ssmmessages` does not
/// satisfy `...ssm`.
fn names_service(resolved: &str, expected: &str) -> bool {
    resolved.match_indices(expected).any(|(start, _)| {
        resolved[start + expected.len()..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_ascii_alphanumeric())
    })
}
