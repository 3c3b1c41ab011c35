//! Structure-aware fuzz target: builds templates out of the resource types and
//! intrinsic shapes the rules look at, so the fuzzer spends its time inside
//! rule logic instead of the JSON parser.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_template_structure
//! ```

#![no_main]

use arbitrary::Arbitrary;
use consoleguard_domain::{RegionContext, TemplateModel};
use consoleguard_types::CheckStatus;
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value, json};

const TYPES: &[&str] = &[
    "AWS::EC2::VPCEndpoint",
    "AWS::Route53::HostedZone",
    "AWS::Route53::RecordSet",
    "AWS::EC2::SecurityGroup",
    "AWS::EC2::Instance",
    "AWS::EC2::NatGateway",
    "AWS::EC2::Subnet",
    "AWS::EC2::RouteTable",
];

const KEYS: &[&str] = &[
    "VpcEndpointType",
    "ServiceName",
    "PolicyDocument",
    "PrivateDnsEnabled",
    "Name",
    "SecurityGroupIngress",
    "IamInstanceProfile",
    "MapPublicIpOnLaunch",
    "Statement",
    "Condition",
    "StringEquals",
    "aws:PrincipalAccount",
    "IpProtocol",
    "FromPort",
    "ToPort",
];

#[derive(Arbitrary, Debug)]
enum Node {
    Null,
    Bool(bool),
    Number(i16),
    Text(String),
    Keyword(u8),
    RegionRef,
    Ref(String),
    Join(String, Vec<Node>),
    OtherIntrinsic(Box<Node>),
    List(Vec<Node>),
    Mapping(Vec<(u8, Node)>),
}

impl Node {
    fn to_json(&self, depth: u8) -> Value {
        if depth > 6 {
            return Value::Null;
        }
        match self {
            Node::Null => Value::Null,
            Node::Bool(b) => json!(b),
            Node::Number(n) => json!(n),
            Node::Text(s) => json!(s),
            Node::Keyword(k) => json!(pick(KEYS, *k)),
            Node::RegionRef => json!({ "Ref": "AWS::Region" }),
            Node::Ref(s) => json!({ "Ref": s }),
            Node::Join(sep, parts) => {
                let parts: Vec<Value> = parts.iter().map(|p| p.to_json(depth + 1)).collect();
                json!({ "Fn::Join": [sep, parts] })
            }
            Node::OtherIntrinsic(inner) => json!({ "Fn::GetAtt": inner.to_json(depth + 1) }),
            Node::List(items) => Value::Array(items.iter().map(|i| i.to_json(depth + 1)).collect()),
            Node::Mapping(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (pick(KEYS, *k).to_string(), v.to_json(depth + 1)))
                    .collect(),
            ),
        }
    }
}

#[derive(Arbitrary, Debug)]
struct FuzzResource {
    id: String,
    type_index: u8,
    properties: Vec<(u8, Node)>,
}

#[derive(Arbitrary, Debug)]
struct FuzzTemplate {
    region: String,
    resources: Vec<FuzzResource>,
}

fn pick<'a>(items: &[&'a str], index: u8) -> &'a str {
    items[usize::from(index) % items.len()]
}

fuzz_target!(|input: FuzzTemplate| {
    let mut resources = Map::new();
    for r in &input.resources {
        let properties: Map<String, Value> = r
            .properties
            .iter()
            .map(|(k, v)| (pick(KEYS, *k).to_string(), v.to_json(0)))
            .collect();
        resources.insert(
            r.id.clone(),
            json!({ "Type": pick(TYPES, r.type_index), "Properties": properties }),
        );
    }

    let template = json!({ "Resources": resources });
    let Ok(model) = TemplateModel::from_json(&template) else {
        return;
    };

    let ctx = RegionContext::new(input.region);
    let first = consoleguard_domain::validate(&model, &ctx);
    let second = consoleguard_domain::validate(&model, &ctx);
    assert_eq!(first, second);
    assert_eq!(
        first.valid,
        first
            .checks
            .iter()
            .all(|c| c.status != CheckStatus::Fail)
    );
});
