use crate::model::TemplateModel;
use serde_json::{Map, Value as JsonValue, json};

/// `{"Fn::Join": ["", ["com.amazonaws.", {"Ref": "AWS::Region"}, ".<service>"]]}`
pub fn joined_service(service: &str) -> JsonValue {
    json!({
        "Fn::Join": ["", ["com.amazonaws.", { "Ref": "AWS::Region" }, format!(".{service}")]]
    })
}

pub fn restricting_policy() -> JsonValue {
    json!({
        "Statement": [{
            "Effect": "Allow",
            "Principal": { "AWS": "*" },
            "Action": "*",
            "Resource": "*",
            "Condition": { "StringEquals": { "aws:PrincipalAccount": { "Ref": "AWS::AccountId" } } }
        }],
        "Version": "2012-10-17"
    })
}

pub fn interface_endpoint(
    service_name: JsonValue,
    policy: Option<JsonValue>,
    private_dns: bool,
) -> JsonValue {
    let mut props = Map::new();
    props.insert("VpcEndpointType".into(), json!("Interface"));
    props.insert("ServiceName".into(), service_name);
    props.insert("PrivateDnsEnabled".into(), json!(private_dns));
    props.insert("VpcId".into(), json!({ "Ref": "AppVPC" }));
    if let Some(policy) = policy {
        props.insert("PolicyDocument".into(), policy);
    }
    json!({ "Type": "AWS::EC2::VPCEndpoint", "Properties": props })
}

pub fn gateway_endpoint(service_name: JsonValue) -> JsonValue {
    json!({
        "Type": "AWS::EC2::VPCEndpoint",
        "Properties": { "VpcEndpointType": "Gateway", "ServiceName": service_name }
    })
}

pub fn hosted_zone(name: &str) -> JsonValue {
    json!({
        "Type": "AWS::Route53::HostedZone",
        "Properties": { "Name": name, "VPCs": [{ "VPCId": { "Ref": "AppVPC" }, "VPCRegion": { "Ref": "AWS::Region" } }] }
    })
}

pub fn resource(resource_type: &str, properties: JsonValue) -> JsonValue {
    json!({ "Type": resource_type, "Properties": properties })
}

pub fn template(resources: Vec<(&str, JsonValue)>) -> TemplateModel {
    let resources: Map<String, JsonValue> = resources
        .into_iter()
        .map(|(id, r)| (id.to_string(), r))
        .collect();
    TemplateModel::from_json(&json!({ "Resources": resources })).expect("test template decodes")
}

/// Resources of a template that passes every rule, region-independent.
pub fn complete_resources() -> Vec<(&'static str, JsonValue)> {
    vec![
        ("AppVPC", resource("AWS::EC2::VPC", json!({ "CidrBlock": "172.16.0.0/16" }))),
        (
            "PrivateSubnet1",
            resource("AWS::EC2::Subnet", json!({ "MapPublicIpOnLaunch": false })),
        ),
        (
            "PublicSubnet1",
            resource("AWS::EC2::Subnet", json!({ "MapPublicIpOnLaunch": true })),
        ),
        ("PrivateRouteTable1", resource("AWS::EC2::RouteTable", json!({}))),
        ("NatGateway1", resource("AWS::EC2::NatGateway", json!({}))),
        (
            "EndpointSG",
            resource(
                "AWS::EC2::SecurityGroup",
                json!({ "SecurityGroupIngress": [{ "IpProtocol": "tcp", "FromPort": 443, "ToPort": 443 }] }),
            ),
        ),
        (
            "Instance",
            resource(
                "AWS::EC2::Instance",
                json!({ "IamInstanceProfile": { "Ref": "InstanceProfile" } }),
            ),
        ),
        ("S3Endpoint", gateway_endpoint(joined_service("s3"))),
        (
            "ConsoleEndpoint",
            interface_endpoint(joined_service("console"), Some(restricting_policy()), true),
        ),
        (
            "SigninEndpoint",
            interface_endpoint(joined_service("signin"), Some(restricting_policy()), true),
        ),
        (
            "SSMEndpoint",
            interface_endpoint(joined_service("ssm"), Some(restricting_policy()), true),
        ),
        (
            "EC2MessagesEndpoint",
            interface_endpoint(joined_service("ec2messages"), Some(restricting_policy()), true),
        ),
        (
            "SSMMessagesEndpoint",
            interface_endpoint(joined_service("ssmmessages"), Some(restricting_policy()), true),
        ),
        ("ConsoleZone", hosted_zone("console.aws.amazon.com")),
        ("SigninZone", hosted_zone("signin.aws.amazon.com.")),
        (
            "ConsoleRecord",
            resource("AWS::Route53::RecordSet", json!({ "Name": "console.aws.amazon.com" })),
        ),
    ]
}

/// `complete_resources` with the entry `id` removed.
pub fn complete_without(id: &str) -> TemplateModel {
    template(
        complete_resources()
            .into_iter()
            .filter(|(rid, _)| *rid != id)
            .collect(),
    )
}
