use crate::context::RegionContext;
use crate::model::{TYPE_ROUTE_TABLE, TYPE_SUBNET, TemplateModel};
use consoleguard_types::{Check, CheckStatus};

pub fn run(model: &TemplateModel, _ctx: &RegionContext) -> Vec<Check> {
    let private_subnets = model
        .of_type(TYPE_SUBNET)
        .filter(|(_, subnet)| !subnet.has_truthy("MapPublicIpOnLaunch"))
        .count();
    let route_tables = model.count_of_type(TYPE_ROUTE_TABLE);

    vec![
        Check::outcome(
            "Private Subnets",
            private_subnets > 0,
            CheckStatus::Fail,
            format!("Found {private_subnets} private subnet(s)"),
            "No private subnets found",
        ),
        Check::outcome(
            "Route Tables",
            route_tables > 0,
            CheckStatus::Warning,
            format!("Found {route_tables} route table(s)"),
            "No route tables found",
        ),
    ]
}
