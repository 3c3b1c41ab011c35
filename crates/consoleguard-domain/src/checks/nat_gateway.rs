use crate::context::RegionContext;
use crate::model::{TYPE_NAT_GATEWAY, TemplateModel};
use consoleguard_types::{Check, CheckStatus};

pub fn run(model: &TemplateModel, _ctx: &RegionContext) -> Vec<Check> {
    let found = model.of_type(TYPE_NAT_GATEWAY).next().is_some();

    // Missing egress is a warning only.
    vec![Check::outcome(
        "NAT Gateway",
        found,
        CheckStatus::Warning,
        "NAT Gateway found for private subnet egress",
        "No NAT Gateway found (required for private subnet internet access)",
    )]
}
