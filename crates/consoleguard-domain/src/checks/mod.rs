use crate::context::RegionContext;
use crate::model::TemplateModel;
use consoleguard_types::{Check, ids};

mod hosted_zones;
mod https_ingress;
mod instance;
mod interface_endpoints;
mod nat_gateway;
mod network_layout;
mod policy_and_dns;
mod record_sets;
mod s3_gateway;
mod utils;


/// A rule reads the model and returns its own records; rules never see each
/// other's output.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub id: &'static str,
    pub run: fn(&TemplateModel, &RegionContext) -> Vec<Check>,
}

/// The rule battery, in execution order.
pub const RULES: &[Rule] = &[
    Rule {
        id: ids::RULE_INTERFACE_ENDPOINTS,
        run: interface_endpoints::run,
    },
    Rule {
        id: ids::RULE_S3_GATEWAY,
        run: s3_gateway::run,
    },
    Rule {
        id: ids::RULE_POLICY_AND_DNS,
        run: policy_and_dns::run,
    },
    Rule {
        id: ids::RULE_HOSTED_ZONES,
        run: hosted_zones::run,
    },
    Rule {
        id: ids::RULE_RECORD_SETS,
        run: record_sets::run,
    },
    Rule {
        id: ids::RULE_HTTPS_INGRESS,
        run: https_ingress::run,
    },
    Rule {
        id: ids::RULE_INSTANCE,
        run: instance::run,
    },
    Rule {
        id: ids::RULE_NAT_GATEWAY,
        run: nat_gateway::run,
    },
    Rule {
        id: ids::RULE_NETWORK_LAYOUT,
        run: network_layout::run,
    },
];

pub fn run_all(model: &TemplateModel, ctx: &RegionContext) -> Vec<Check> {
    RULES
        .iter()
        .flat_map(|rule| {
            let checks = (rule.run)(model, ctx);
            tracing::debug!(rule = rule.id, records = checks.len(), "rule evaluated");
            checks
        })
        .collect()
}
