use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeMap;

// Resource types
pub const TYPE_VPC_ENDPOINT: &str = "AWS::EC2::VPCEndpoint";
pub const TYPE_HOSTED_ZONE: &str = "AWS::Route53::HostedZone";
pub const TYPE_RECORD_SET: &str = "AWS::Route53::RecordSet";
pub const TYPE_SECURITY_GROUP: &str = "AWS::EC2::SecurityGroup";
pub const TYPE_INSTANCE: &str = "AWS::EC2::Instance";
pub const TYPE_NAT_GATEWAY: &str = "AWS::EC2::NatGateway";
pub const TYPE_SUBNET: &str = "AWS::EC2::Subnet";
pub const TYPE_ROUTE_TABLE: &str = "AWS::EC2::RouteTable";

// `VpcEndpointType` values
pub const ENDPOINT_INTERFACE: &str = "Interface";
pub const ENDPOINT_GATEWAY: &str = "Gateway";

/// Failure to turn caller-supplied text into a template model.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("template must be a JSON object")]
    NotAMapping,

    #[error("`Resources` must be a JSON object")]
    ResourcesNotAMapping,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    String(String),
    Number(f64),
    Bool(bool),
}

/// A property value, with the intrinsic functions we understand lifted out
/// of the raw JSON. Anything else is `Unknown` and never resolves.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Literal(Literal),
    Join { separator: String, parts: Vec<Value> },
    Ref(String),
    Mapping(BTreeMap<String, Value>),
    List(Vec<Value>),
    Null,
    Unknown,
}

impl Value {
    pub fn from_json(json: &JsonValue) -> Value {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Literal(Literal::Bool(*b)),
            JsonValue::Number(n) => match n.as_f64() {
                Some(n) => Value::Literal(Literal::Number(n)),
                None => Value::Unknown,
            },
            JsonValue::String(s) => Value::Literal(Literal::String(s.clone())),
            JsonValue::Array(items) => Value::List(items.iter().map(Value::from_json).collect()),
            JsonValue::Object(map) => from_object(map),
        }
    }

    pub fn string(s: impl Into<String>) -> Value {
        Value::Literal(Literal::String(s.into()))
    }

    pub fn number(n: f64) -> Value {
        Value::Literal(Literal::Number(n))
    }

    pub fn bool(b: bool) -> Value {
        Value::Literal(Literal::Bool(b))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Literal string only; expressions are not resolved.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Literal(Literal::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Literal(Literal::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// `Null`, `false`, `0` and `""` are falsy; everything else is truthy.
    /// An unsupported intrinsic is still a JSON object, so `Unknown` counts as
    /// set even though it never resolves.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Unknown => true,
            Value::Literal(Literal::Bool(b)) => *b,
            Value::Literal(Literal::Number(n)) => *n != 0.0 && !n.is_nan(),
            Value::Literal(Literal::String(s)) => !s.is_empty(),
            Value::Join { .. } | Value::Ref(_) | Value::Mapping(_) | Value::List(_) => true,
        }
    }
}

fn from_object(map: &Map<String, JsonValue>) -> Value {
    if map.len() == 1
        && let Some((key, inner)) = map.iter().next()
    {
        match key.as_str() {
            "Ref" => {
                return match inner.as_str() {
                    Some(name) => Value::Ref(name.to_string()),
                    None => Value::Unknown,
                };
            }
            "Fn::Join" => return parse_join(inner).unwrap_or(Value::Unknown),
            k if k.starts_with("Fn::") => return Value::Unknown,
            _ => {}
        }
    }

    Value::Mapping(
        map.iter()
            .map(|(k, v)| (k.clone(), Value::from_json(v)))
            .collect(),
    )
}

/// `{"Fn::Join": [separator, [parts...]]}`
fn parse_join(inner: &JsonValue) -> Option<Value> {
    let [separator, parts] = inner.as_array()?.as_slice() else {
        return None;
    };
    let separator = separator.as_str()?;
    let parts = parts.as_array()?;
    Some(Value::Join {
        separator: separator.to_string(),
        parts: parts.iter().map(Value::from_json).collect(),
    })
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resource {
    /// The raw `Type` string; empty when missing or not a string.
    pub resource_type: String,
    pub properties: BTreeMap<String, Value>,
}

impl Resource {
    pub fn from_json(json: &JsonValue) -> Resource {
        let resource_type = json
            .get("Type")
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
            .to_string();
        let properties = json
            .get("Properties")
            .and_then(JsonValue::as_object)
            .map(|props| {
                props
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect()
            })
            .unwrap_or_default();

        Resource {
            resource_type,
            properties,
        }
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn has_truthy(&self, name: &str) -> bool {
        self.property(name).is_some_and(Value::is_truthy)
    }

    pub fn is_type(&self, resource_type: &str) -> bool {
        self.resource_type == resource_type
    }

    fn is_endpoint_of(&self, endpoint_type: &str) -> bool {
        self.is_type(TYPE_VPC_ENDPOINT)
            && self.property("VpcEndpointType").and_then(Value::as_str) == Some(endpoint_type)
    }

    pub fn is_interface_endpoint(&self) -> bool {
        self.is_endpoint_of(ENDPOINT_INTERFACE)
    }

    pub fn is_gateway_endpoint(&self) -> bool {
        self.is_endpoint_of(ENDPOINT_GATEWAY)
    }
}

/// Read-only view over a template's `Resources` section.
///
/// Resources are keyed by logical id; iteration is in id order so rules that
/// emit one record per resource are deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemplateModel {
    pub resources: BTreeMap<String, Resource>,
}

impl TemplateModel {
    pub fn from_json_str(text: &str) -> Result<TemplateModel, TemplateError> {
        let json: JsonValue = serde_json::from_str(text)?;
        TemplateModel::from_json(&json)
    }

    /// Only `Resources` is read. `Parameters`, `Outputs` and anything else are
    /// ignored; a missing or `null` `Resources` yields an empty model.
    pub fn from_json(json: &JsonValue) -> Result<TemplateModel, TemplateError> {
        let root = json.as_object().ok_or(TemplateError::NotAMapping)?;

        let resources = match root.get("Resources") {
            None | Some(JsonValue::Null) => BTreeMap::new(),
            Some(JsonValue::Object(map)) => map
                .iter()
                .map(|(id, r)| (id.clone(), Resource::from_json(r)))
                .collect(),
            Some(_) => return Err(TemplateError::ResourcesNotAMapping),
        };

        Ok(TemplateModel { resources })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.resources.iter().map(|(id, r)| (id.as_str(), r))
    }

    pub fn of_type<'a>(
        &'a self,
        resource_type: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a Resource)> + 'a {
        self.iter().filter(move |(_, r)| r.is_type(resource_type))
    }

    pub fn count_of_type(&self, resource_type: &str) -> usize {
        self.of_type(resource_type).count()
    }

    pub fn interface_endpoints(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.iter().filter(|(_, r)| r.is_interface_endpoint())
    }

    pub fn gateway_endpoints(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.iter().filter(|(_, r)| r.is_gateway_endpoint())
    }
}
