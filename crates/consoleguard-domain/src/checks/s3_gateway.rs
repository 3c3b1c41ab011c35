use crate::checks::utils::service_name;
use crate::context::RegionContext;
use crate::model::TemplateModel;
use consoleguard_types::{Check, CheckStatus};

const STORAGE_SERVICE: &str = "s3";

pub fn run(model: &TemplateModel, ctx: &RegionContext) -> Vec<Check> {
    let found = model
        .gateway_endpoints()
        .filter_map(|(_, r)| service_name(r, ctx))
        .any(|name| name.contains(STORAGE_SERVICE));

    vec![Check::outcome(
        "VPC Endpoint: S3 Gateway",
        found,
        CheckStatus::Fail,
        "S3 Gateway VPC endpoint found",
        "Missing S3 Gateway VPC endpoint",
    )]
}
