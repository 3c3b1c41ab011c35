//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - resolver totality and join semantics
//! - decoding arbitrary JSON without panicking
//! - deterministic, idempotent validation output

use crate::context::RegionContext;
use crate::engine::validate;
use crate::model::{Literal, TemplateModel, Value};
use crate::resolve::{REGION_PSEUDO_PARAMETER, resolve};
use consoleguard_types::CheckStatus;
use proptest::prelude::*;
use serde_json::{Map, Value as JsonValue, json};

// ============================================================================
// Strategies
// ============================================================================

fn arb_region() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2}-[a-z]{4,9}-[1-9]").unwrap()
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        "[a-z0-9.]{0,8}".prop_map(|s| Value::string(s)),
        any::<bool>().prop_map(Value::bool),
        (0u16..1000).prop_map(|n| Value::number(f64::from(n))),
        prop_oneof![
            Just(REGION_PSEUDO_PARAMETER.to_string()),
            "[A-Za-z:]{1,12}",
        ]
        .prop_map(Value::Ref),
        Just(Value::Null),
        Just(Value::Unknown),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            ("[,./-]{0,1}", prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(separator, parts)| Value::Join { separator, parts }),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::btree_map("[A-Za-z]{1,6}", inner, 0..4).prop_map(Value::Mapping),
        ]
    })
}

fn arb_json() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(|b| json!(b)),
        (0u16..1000).prop_map(|n| json!(n)),
        "[a-z:.]{0,10}".prop_map(|s| json!(s)),
    ];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(JsonValue::Array),
            prop::collection::btree_map(
                "(Ref|Fn::Join|Fn::Sub|Statement|Condition|StringEquals|[A-Za-z]{1,8})",
                inner,
                0..4,
            )
            .prop_map(|m| JsonValue::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_resource_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("AWS::EC2::VPCEndpoint"),
        Just("AWS::Route53::HostedZone"),
        Just("AWS::Route53::RecordSet"),
        Just("AWS::EC2::SecurityGroup"),
        Just("AWS::EC2::Instance"),
        Just("AWS::EC2::NatGateway"),
        Just("AWS::EC2::Subnet"),
        Just("AWS::EC2::RouteTable"),
        Just("AWS::S3::Bucket"),
    ]
    .prop_map(str::to_string)
}

fn arb_property_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("VpcEndpointType"),
        Just("ServiceName"),
        Just("PolicyDocument"),
        Just("PrivateDnsEnabled"),
        Just("Name"),
        Just("SecurityGroupIngress"),
        Just("IamInstanceProfile"),
        Just("MapPublicIpOnLaunch"),
    ]
    .prop_map(str::to_string)
}

fn arb_resource() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        4 => (
            arb_resource_type(),
            prop::collection::btree_map(arb_property_name(), arb_json(), 0..5),
        )
            .prop_map(|(ty, props)| {
                let props: Map<String, JsonValue> = props.into_iter().collect();
                json!({ "Type": ty, "Properties": props })
            }),
        1 => arb_json(),
    ]
}

fn arb_template() -> impl Strategy<Value = JsonValue> {
    prop::collection::btree_map("[A-Z][a-z0-9]{0,6}", arb_resource(), 0..8).prop_map(|resources| {
        let resources: Map<String, JsonValue> = resources.into_iter().collect();
        json!({ "Resources": resources })
    })
}

// ============================================================================
// Resolver
// ============================================================================

proptest! {
    /// Resolution is total: any value and region produce an answer.
    #[test]
    fn resolve_is_total(value in arb_value(), region in arb_region()) {
        let resolved = resolve(&value, &region);
        match &value {
            Value::Literal(Literal::String(s)) => prop_assert_eq!(resolved, Some(s.clone())),
            Value::Join { .. } => {}
            _ => prop_assert_eq!(resolved, None),
        }
    }

    /// A join of literals is the separator-joined concatenation.
    #[test]
    fn literal_join_concatenates(
        parts in prop::collection::vec("[a-z0-9.]{0,6}", 0..5),
        separator in "[,./-]{0,2}",
        region in arb_region(),
    ) {
        let value = Value::Join {
            separator: separator.clone(),
            parts: parts.iter().map(|p| Value::string(p.clone())).collect(),
        };
        prop_assert_eq!(resolve(&value, &region), Some(parts.join(&separator)));
    }

    /// The region pseudo-parameter is substituted wherever it appears.
    #[test]
    fn region_ref_is_substituted(region in arb_region(), service in "[a-z0-9]{1,12}") {
        let value = Value::Join {
            separator: String::new(),
            parts: vec![
                Value::string("com.amazonaws."),
                Value::Ref(REGION_PSEUDO_PARAMETER.to_string()),
                Value::string(format!(".{service}")),
            ],
        };
        prop_assert_eq!(
            resolve(&value, &region),
            Some(format!("com.amazonaws.{region}.{service}"))
        );
    }
}

// ============================================================================
// Decoding and validation
// ============================================================================

proptest! {
    /// Arbitrary decodable JSON never panics the decoder or any rule.
    #[test]
    fn arbitrary_json_never_panics(json in arb_json(), region in arb_region()) {
        if let Ok(model) = TemplateModel::from_json(&json) {
            let result = validate(&model, &RegionContext::new(region));
            prop_assert!(result.checks.len() >= 14);
        }
    }

    /// `valid` is exactly "no record failed".
    #[test]
    fn valid_is_derived_from_checks(template in arb_template(), region in arb_region()) {
        let model = TemplateModel::from_json(&template).expect("object with Resources mapping");
        let result = validate(&model, &RegionContext::new(region));
        let has_fail = result.checks.iter().any(|c| c.status == CheckStatus::Fail);
        prop_assert_eq!(result.valid, !has_fail);
        prop_assert!(result.checks.len() >= 14);
    }

    /// Two runs over the same input serialize byte-identically.
    #[test]
    fn validation_is_idempotent(template in arb_template(), region in arb_region()) {
        let ctx = RegionContext::new(region);
        let first = TemplateModel::from_json(&template).expect("decode");
        let second = TemplateModel::from_json(&template).expect("decode");

        let a = serde_json::to_string(&validate(&first, &ctx)).expect("serialize");
        let b = serde_json::to_string(&validate(&second, &ctx)).expect("serialize");
        let c = serde_json::to_string(&validate(&first, &ctx)).expect("serialize");
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&a, &c);
    }

    /// The five required-endpoint records always lead the output, in order.
    #[test]
    fn required_endpoint_records_come_first(template in arb_template()) {
        let model = TemplateModel::from_json(&template).expect("decode");
        let result = validate(&model, &RegionContext::default());
        let names: Vec<&str> = result.checks.iter().take(5).map(|c| c.name.as_str()).collect();
        prop_assert_eq!(
            names,
            vec![
                "VPC Endpoint: console",
                "VPC Endpoint: signin",
                "VPC Endpoint: ssm",
                "VPC Endpoint: ec2messages",
                "VPC Endpoint: ssmmessages",
            ]
        );
    }
}
