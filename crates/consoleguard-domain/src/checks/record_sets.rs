use crate::context::RegionContext;
use crate::model::{TYPE_RECORD_SET, TemplateModel};
use consoleguard_types::{Check, CheckStatus};

pub fn run(model: &TemplateModel, _ctx: &RegionContext) -> Vec<Check> {
    let count = model.count_of_type(TYPE_RECORD_SET);

    vec![Check::outcome(
        "Route53 Records",
        count > 0,
        CheckStatus::Warning,
        format!("Found {count} Route53 records"),
        "No Route53 records found",
    )]
}
