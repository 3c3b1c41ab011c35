use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const CONFIG_SCHEMA_V1: &str = "consoleguard.config.v1";

/// `consoleguard.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional and unknown
/// keys are tolerated so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConsoleguardConfigV1 {
    /// Optional schema string for tooling (`consoleguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Region substituted for `{"Ref": "AWS::Region"}` and used to build the
    /// expected endpoint service names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// When the CLI exits non-zero: `fail` (default) or `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,
}
