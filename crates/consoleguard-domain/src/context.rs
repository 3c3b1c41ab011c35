use consoleguard_types::ids::DEFAULT_REGION;

/// Prefix of every AWS service endpoint name.
pub const SERVICE_PREFIX: &str = "com.amazonaws";

/// The deployment region a template is validated against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionContext {
    region: String,
}

impl Default for RegionContext {
    fn default() -> Self {
        RegionContext::new(DEFAULT_REGION)
    }
}

impl RegionContext {
    pub fn new<S: Into<String>>(region: S) -> Self {
        Self {
            region: region.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.region
    }

    /// Endpoint service name for `service` in this region, e.g.
    /// `com.amazonaws.eu-west-1.signin`.
    pub fn service_name(&self, service: &str) -> String {
        format!("{SERVICE_PREFIX}.{}.{service}", self.region)
    }
}
