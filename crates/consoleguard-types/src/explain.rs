//! Explain registry for validation rules.
//!
//! Maps rule IDs to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule.
    pub title: &'static str,
    /// What the rule inspects and which records it emits.
    pub description: &'static str,
    /// How to fix failures and warnings.
    pub remediation: &'static str,
    /// Before/after template fragments.
    pub examples: ExamplePair,
}

/// Before and after template fragments (CloudFormation JSON).
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Fragment that would trigger a failure or warning.
    pub before: &'static str,
    /// Fragment that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule id.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::RULE_INTERFACE_ENDPOINTS => Some(explain_interface_endpoints()),
        ids::RULE_S3_GATEWAY => Some(explain_s3_gateway()),
        ids::RULE_POLICY_AND_DNS => Some(explain_policy_and_dns()),
        ids::RULE_HOSTED_ZONES => Some(explain_hosted_zones()),
        ids::RULE_RECORD_SETS => Some(explain_record_sets()),
        ids::RULE_HTTPS_INGRESS => Some(explain_https_ingress()),
        ids::RULE_INSTANCE => Some(explain_instance()),
        ids::RULE_NAT_GATEWAY => Some(explain_nat_gateway()),
        ids::RULE_NETWORK_LAYOUT => Some(explain_network_layout()),
        _ => None,
    }
}

/// List all known rule IDs, in execution order.
pub fn all_rule_ids() -> &'static [&'static str] {
    ids::ALL_RULES
}

fn explain_interface_endpoints() -> Explanation {
    Explanation {
        title: "Required Interface VPC Endpoints",
        description: "\
Private console access needs an interface VPC endpoint for each of:
console, signin, ssm, ec2messages, ssmmessages.

An endpoint matches when its type is `AWS::EC2::VPCEndpoint`, its
`VpcEndpointType` is `Interface`, and its resolved `ServiceName` contains
`com.amazonaws.<region>.<service>` as a whole name: `...ssmmessages` does
not count as `...ssm`. `ServiceName` may be a literal string or
an `Fn::Join` over literals and `{\"Ref\": \"AWS::Region\"}`; any other
expression is treated as unresolvable and never matches.

One record is emitted per required service, named `VPC Endpoint: <service>`.",
        remediation: "\
Add an `AWS::EC2::VPCEndpoint` with `VpcEndpointType: Interface` for every
missing service, placed in the private subnets and protected by a security
group that allows HTTPS from the VPC CIDR.",
        examples: ExamplePair {
            before: r#""Resources": {}"#,
            after: r#""SigninEndpoint": {
  "Type": "AWS::EC2::VPCEndpoint",
  "Properties": {
    "VpcEndpointType": "Interface",
    "ServiceName": { "Fn::Join": ["", ["com.amazonaws.", { "Ref": "AWS::Region" }, ".signin"]] },
    "PrivateDnsEnabled": true
  }
}"#,
        },
    }
}

fn explain_s3_gateway() -> Explanation {
    Explanation {
        title: "S3 Gateway Endpoint",
        description: "\
Instances in private subnets reach S3 through a gateway VPC endpoint. The
rule passes when some `AWS::EC2::VPCEndpoint` has `VpcEndpointType: Gateway`
and a resolved `ServiceName` containing `s3`.",
        remediation: "Add a gateway endpoint for `com.amazonaws.<region>.s3` attached to the private route tables.",
        examples: ExamplePair {
            before: r#""S3Endpoint": { "Type": "AWS::EC2::VPCEndpoint", "Properties": { "VpcEndpointType": "Interface", "ServiceName": "com.amazonaws.us-east-1.s3" } }"#,
            after: r#""S3Endpoint": { "Type": "AWS::EC2::VPCEndpoint", "Properties": { "VpcEndpointType": "Gateway", "ServiceName": "com.amazonaws.us-east-1.s3" } }"#,
        },
    }
}

fn explain_policy_and_dns() -> Explanation {
    Explanation {
        title: "Endpoint Policy and Private DNS",
        description: "\
Every interface endpoint gets two records:

- `Endpoint Policy: <service>` fails when no `PolicyDocument` is attached.
  When one is, `details` describes it: `Policy has no statements`,
  `Policy restricts access to specific account(s)` (the first statement
  carries `Condition.StringEquals[\"aws:PrincipalAccount\"]`), or
  `Policy does not restrict access by account`.
- `Private DNS: <service>` fails unless `PrivateDnsEnabled` is true.

Only the first policy statement is inspected. A restrictive condition in a
later statement is still reported as unrestricted.",
        remediation: "\
Attach a policy whose first statement restricts `aws:PrincipalAccount` to the
owning account, and set `PrivateDnsEnabled: true` so the service hostnames
resolve to the endpoint ENIs.",
        examples: ExamplePair {
            before: r#""Properties": { "VpcEndpointType": "Interface", "ServiceName": "com.amazonaws.us-east-1.ssm" }"#,
            after: r#""Properties": {
  "VpcEndpointType": "Interface",
  "ServiceName": "com.amazonaws.us-east-1.ssm",
  "PrivateDnsEnabled": true,
  "PolicyDocument": {
    "Statement": [{
      "Effect": "Allow", "Principal": "*", "Action": "*", "Resource": "*",
      "Condition": { "StringEquals": { "aws:PrincipalAccount": "111122223333" } }
    }]
  }
}"#,
        },
    }
}

fn explain_hosted_zones() -> Explanation {
    Explanation {
        title: "Private Hosted Zones",
        description: "\
The console and sign-in hostnames must resolve privately. The rule looks for
`AWS::Route53::HostedZone` resources named `console.aws.amazon.com` and
`signin.aws.amazon.com` (a trailing dot is accepted) and emits one record per
zone.",
        remediation: "Create both hosted zones and associate them with the VPC through the `VPCs` property.",
        examples: ExamplePair {
            before: r#""ConsoleZone": { "Type": "AWS::Route53::HostedZone", "Properties": { "Name": "console.aws.example.com" } }"#,
            after: r#""ConsoleZone": { "Type": "AWS::Route53::HostedZone", "Properties": { "Name": "console.aws.amazon.com." } }"#,
        },
    }
}

fn explain_record_sets() -> Explanation {
    Explanation {
        title: "Route53 Records",
        description: "\
Counts `AWS::Route53::RecordSet` resources. Without records the private zones
do not point anywhere, so an empty count is reported as a warning.",
        remediation: "Add alias records in each private zone targeting the matching interface endpoint.",
        examples: ExamplePair {
            before: r#""Resources": {}"#,
            after: r#""ConsoleRecord": { "Type": "AWS::Route53::RecordSet", "Properties": { "Name": "console.aws.amazon.com", "Type": "A" } }"#,
        },
    }
}

fn explain_https_ingress() -> Explanation {
    Explanation {
        title: "Security Group HTTPS Access",
        description: "\
Looks through `SecurityGroupIngress` on every `AWS::EC2::SecurityGroup`. A
rule matches when (`FromPort` is 443 or `IpProtocol` is `tcp`) and (`ToPort`
is 443 or `IpProtocol` is `tcp`). Any plain TCP rule therefore matches,
whatever its ports. A missing match is a warning.",
        remediation: "Allow TCP 443 from the VPC CIDR on the endpoint security group.",
        examples: ExamplePair {
            before: r#""SecurityGroupIngress": []"#,
            after: r#""SecurityGroupIngress": [{ "IpProtocol": "tcp", "FromPort": 443, "ToPort": 443, "CidrIp": "172.16.0.0/16" }]"#,
        },
    }
}

fn explain_instance() -> Explanation {
    Explanation {
        title: "EC2 Instance",
        description: "\
An `AWS::EC2::Instance` is optional; its absence is a warning. When one is
present a second record, `EC2 IAM Role`, warns if the first instance has no
`IamInstanceProfile` (Session Manager needs one).",
        remediation: "Attach an instance profile whose role carries `AmazonSSMManagedInstanceCore`.",
        examples: ExamplePair {
            before: r#""Instance": { "Type": "AWS::EC2::Instance", "Properties": { "InstanceType": "t3.medium" } }"#,
            after: r#""Instance": { "Type": "AWS::EC2::Instance", "Properties": { "InstanceType": "t3.medium", "IamInstanceProfile": { "Ref": "InstanceProfile" } } }"#,
        },
    }
}

fn explain_nat_gateway() -> Explanation {
    Explanation {
        title: "NAT Gateway",
        description: "\
Private subnets need a NAT gateway for outbound internet access. A missing
`AWS::EC2::NatGateway` is reported as a warning, never a failure.",
        remediation: "Add a NAT gateway in a public subnet and route the private subnets' default route through it.",
        examples: ExamplePair {
            before: r#""Resources": {}"#,
            after: r#""Nat": { "Type": "AWS::EC2::NatGateway", "Properties": { "SubnetId": { "Ref": "PublicSubnet" } } }"#,
        },
    }
}

fn explain_network_layout() -> Explanation {
    Explanation {
        title: "Network Layout",
        description: "\
Two records:

- `Private Subnets` fails unless at least one `AWS::EC2::Subnet` has
  `MapPublicIpOnLaunch` false or unset.
- `Route Tables` warns when there is no `AWS::EC2::RouteTable`.",
        remediation: "Define private subnets (no public IP on launch) with their own route tables.",
        examples: ExamplePair {
            before: r#""Subnet": { "Type": "AWS::EC2::Subnet", "Properties": { "MapPublicIpOnLaunch": true } }"#,
            after: r#""Subnet": { "Type": "AWS::EC2::Subnet", "Properties": { "MapPublicIpOnLaunch": false } }"#,
        },
    }
}
