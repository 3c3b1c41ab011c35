//! Stable identifiers for validation rules.
//!
//! A rule id is a dotted namespace. Rule ids do not appear in the result
//! document; they key the explain registry and the engine's rule table.

pub const RULE_INTERFACE_ENDPOINTS: &str = "endpoints.interface_required";
pub const RULE_S3_GATEWAY: &str = "endpoints.s3_gateway";
pub const RULE_POLICY_AND_DNS: &str = "endpoints.policy_and_dns";
pub const RULE_HOSTED_ZONES: &str = "dns.private_hosted_zones";
pub const RULE_RECORD_SETS: &str = "dns.record_sets";
pub const RULE_HTTPS_INGRESS: &str = "network.https_ingress";
pub const RULE_INSTANCE: &str = "compute.instance";
pub const RULE_NAT_GATEWAY: &str = "network.nat_gateway";
pub const RULE_NETWORK_LAYOUT: &str = "network.layout";

/// Every rule id, in execution order.
pub const ALL_RULES: &[&str] = &[
    RULE_INTERFACE_ENDPOINTS,
    RULE_S3_GATEWAY,
    RULE_POLICY_AND_DNS,
    RULE_HOSTED_ZONES,
    RULE_RECORD_SETS,
    RULE_HTTPS_INGRESS,
    RULE_INSTANCE,
    RULE_NAT_GATEWAY,
    RULE_NETWORK_LAYOUT,
];

/// Region used when neither the caller nor the config names one.
pub const DEFAULT_REGION: &str = "us-east-1";
