use crate::context::RegionContext;
use crate::model::{TYPE_HOSTED_ZONE, TemplateModel};
use crate::resolve::resolve;
use consoleguard_types::{Check, CheckStatus};

pub const REQUIRED_ZONES: &[&str] = &["console.aws.amazon.com", "signin.aws.amazon.com"];

pub fn run(model: &TemplateModel, ctx: &RegionContext) -> Vec<Check> {
    let names: Vec<String> = model
        .of_type(TYPE_HOSTED_ZONE)
        .filter_map(|(_, r)| r.property("Name").and_then(|n| resolve(n, ctx.as_str())))
        .collect();

    REQUIRED_ZONES
        .iter()
        .map(|zone| {
            let found = names.iter().any(|name| zone_matches(name, zone));
            Check::outcome(
                format!("Route53 Hosted Zone: {zone}"),
                found,
                CheckStatus::Fail,
                format!("Private hosted zone for {zone} found"),
                format!("Missing private hosted zone for {zone}"),
            )
        })
        .collect()
}

/// Route53 zone names may carry a trailing dot.
fn zone_matches(name: &str, zone: &str) -> bool {
    name == zone || name.strip_suffix('.') == Some(zone)
}
